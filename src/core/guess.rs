//! Guess normalization and letter feedback
//!
//! A [`Guess`] is built from raw player input with [`Guess::normalize`] and
//! scored against a [`SecretWord`] with [`Guess::score`].
//!
//! # Duplicate letters
//!
//! Scoring does not consume secret letters once they have been matched. Every
//! guess letter that occurs anywhere in the secret is marked `Present` (or
//! `Correct` when positions line up), even when the guess repeats a letter
//! that the secret holds only once. This is intentionally not the stricter
//! duplicate handling of the newspaper game.

use super::letter::{Letter, LetterStatus};
use super::secret::SecretWord;
use super::text;
use std::fmt;

/// One attempt at the secret word
///
/// Normalization keeps every ASCII letter of the input, so an unvalidated
/// guess may be shorter or longer than [`WORD_LENGTH`](super::WORD_LENGTH).
/// Guesses accepted by a game session always have exactly five scored letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Guess {
    letters: Vec<Letter>,
}

impl Guess {
    /// Build an unscored guess from raw text
    ///
    /// Letters are upper-cased and everything that is not an ASCII letter is
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::{Guess, LetterStatus};
    ///
    /// let guess = Guess::normalize(" h-ello ");
    /// assert_eq!(guess.render(), "HELLO");
    /// assert!(guess.letters().iter().all(|l| l.status() == LetterStatus::Unset));
    /// ```
    #[must_use]
    pub fn normalize(input: &str) -> Self {
        let letters = text::normalize(input).bytes().map(Letter::new).collect();
        Self { letters }
    }

    /// Score every letter against `secret`, returning the scored guess
    ///
    /// Position i is `Correct` when it matches `secret[i]`, otherwise `Present`
    /// when the letter appears anywhere in the secret, otherwise `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::{Guess, LetterStatus, SecretWord};
    ///
    /// let secret = SecretWord::new("HELLO");
    /// let scored = Guess::normalize("viola").score(&secret);
    ///
    /// assert_eq!(
    ///     scored.statuses(),
    ///     vec![
    ///         LetterStatus::Absent,
    ///         LetterStatus::Absent,
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(&self, secret: &SecretWord) -> Self {
        let letters = self
            .letters
            .iter()
            .enumerate()
            .map(|(i, &letter)| letter.with_status(score_letter(letter.byte(), i, secret)))
            .collect();

        Self { letters }
    }

    /// Canonical text of the guess: its letters concatenated in order
    #[must_use]
    pub fn render(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters after normalization
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Feedback for each position, in order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.letters.iter().map(|l| l.status()).collect()
    }

    /// True once every letter carries feedback
    #[must_use]
    pub fn is_scored(&self) -> bool {
        !self.letters.is_empty() && self.letters.iter().all(|l| l.status().is_scored())
    }

    /// True when every letter was scored `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.letters.is_empty()
            && self
                .letters
                .iter()
                .all(|l| l.status() == LetterStatus::Correct)
    }

    /// Check whether the rendered guess spells `secret`
    #[must_use]
    pub fn spells(&self, secret: &SecretWord) -> bool {
        self.render() == secret.as_str()
    }

    /// Share-grid row such as "⬛⬛🟨🟩⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.status().to_emoji()).collect()
    }
}

fn score_letter(letter: u8, position: usize, secret: &SecretWord) -> LetterStatus {
    if secret.byte_at(position) == Some(letter) {
        LetterStatus::Correct
    } else if secret.contains(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
