//! Guess rejection reasons

use super::MAX_GUESSES;
use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Why a session refused a guess
///
/// Every variant is a recoverable validation failure; the session is left
/// exactly as it was before the rejected call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// All guess slots are used up
    #[error("maximum number of guesses ({max}) reached", max = MAX_GUESSES)]
    MaxGuessesReached,

    /// The secret word has already been guessed
    #[error("the word has already been guessed")]
    GameAlreadyEnded,

    /// The guess does not have exactly five letters after normalization
    #[error("guess must be {expected} letters, got {length}", expected = WORD_LENGTH)]
    InvalidLength { length: usize },

    /// The dictionary does not know the guess
    #[error("{word} is not in the word list")]
    UnknownWord { word: String },
}

impl GuessError {
    /// True when no further guess can ever be accepted by the session
    ///
    /// Non-terminal errors mean the player should simply try another word.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::MaxGuessesReached | Self::GameAlreadyEnded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GuessError::MaxGuessesReached.to_string(),
            "maximum number of guesses (6) reached"
        );
        assert_eq!(
            GuessError::InvalidLength { length: 4 }.to_string(),
            "guess must be 5 letters, got 4"
        );
        assert_eq!(
            GuessError::UnknownWord {
                word: "HGDLE".to_string()
            }
            .to_string(),
            "HGDLE is not in the word list"
        );
    }

    #[test]
    fn terminal_classification() {
        assert!(GuessError::MaxGuessesReached.is_terminal());
        assert!(GuessError::GameAlreadyEnded.is_terminal());
        assert!(!GuessError::InvalidLength { length: 3 }.is_terminal());
        assert!(
            !GuessError::UnknownWord {
                word: "XXXXX".to_string()
            }
            .is_terminal()
        );
    }
}
