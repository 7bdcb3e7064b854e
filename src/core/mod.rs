//! Core domain types for Wordle
//!
//! Guess normalization, letter feedback and the secret word. Everything here
//! is pure: no I/O, no shared state.

mod guess;
mod letter;
mod secret;
pub mod text;

pub use guess::Guess;
pub use letter::{Letter, LetterStatus};
pub use secret::{SecretWord, WordError};

/// Number of letters in a secret word and in every accepted guess
pub const WORD_LENGTH: usize = 5;
