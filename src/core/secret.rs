//! The secret word a game is built around

use super::WORD_LENGTH;
use super::text;
use std::fmt;
use thiserror::Error;

/// The answer of a game, stored uppercase
///
/// [`SecretWord::new`] performs no validation; wrapping applications that
/// accept secrets from users should go through [`SecretWord::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    text: String,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl SecretWord {
    /// Create a secret word, upper-casing it
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::SecretWord;
    ///
    /// let secret = SecretWord::new("hello");
    /// assert_eq!(secret.as_str(), "HELLO");
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text::uppercase(text),
        }
    }

    /// Create a secret word, requiring exactly five ASCII letters
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains anything other than ASCII letters
    /// - Length is not exactly 5
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::SecretWord;
    ///
    /// assert!(SecretWord::parse("crane").is_ok());
    /// assert!(SecretWord::parse("too long").is_err());
    /// assert!(SecretWord::parse("sh0rt").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        Ok(Self::new(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Byte at `position`, if the word is long enough
    #[inline]
    #[must_use]
    pub fn byte_at(&self, position: usize) -> Option<u8> {
        self.as_bytes().get(position).copied()
    }

    /// Check if the word contains a specific (uppercase) letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.as_bytes().contains(&letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
