//! Game session rules
//!
//! A [`GameSession`] owns the secret word and the guess history, validates
//! each submission against the [`Dictionary`] collaborator and reports when
//! the game is over.

mod dictionary;
mod error;
mod session;

pub use dictionary::{Dictionary, WordList};
pub use error::GuessError;
pub use session::{GameSession, GameState, validate_word};

/// Number of guesses a player gets per game
pub const MAX_GUESSES: usize = 6;
