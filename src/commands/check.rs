//! Word check command
//!
//! Reports whether a word would be accepted as a guess.

use crate::core::text;
use crate::game::{Dictionary, GuessError, validate_word};

/// Result of checking a word
#[derive(Debug)]
pub struct CheckResult {
    pub word: String,
    pub rejection: Option<GuessError>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Check `word` with the length and dictionary rules of a guess
#[must_use]
pub fn check_word<D: Dictionary + ?Sized>(word: &str, dictionary: &D) -> CheckResult {
    CheckResult {
        word: text::normalize(word),
        rejection: validate_word(word, dictionary).err(),
    }
}
