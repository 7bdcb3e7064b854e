//! Single letter of a guess and its feedback status

use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Not scored yet
    #[default]
    Unset,
    /// Letter does not occur in the secret word
    Absent,
    /// Letter occurs in the secret word at another position
    Present,
    /// Letter matches the secret word at this position
    Correct,
}

impl LetterStatus {
    /// Share-grid square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Unset => '⬜',
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Whether the letter has been scored
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// An uppercase ASCII letter together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    ch: u8,
    status: LetterStatus,
}

impl Letter {
    /// Create an unscored letter
    ///
    /// The byte is upper-cased; callers are expected to pass ASCII letters.
    #[inline]
    #[must_use]
    pub const fn new(ch: u8) -> Self {
        Self {
            ch: ch.to_ascii_uppercase(),
            status: LetterStatus::Unset,
        }
    }

    /// Copy of this letter carrying `status`
    #[inline]
    #[must_use]
    pub const fn with_status(self, status: LetterStatus) -> Self {
        Self {
            ch: self.ch,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.ch as char
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> LetterStatus {
        self.status
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
