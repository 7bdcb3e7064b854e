//! Wordle Rules
//!
//! The rules engine of a Wordle-style game: guess validation, per-letter
//! feedback, guess history and win/loss detection.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rules::core::LetterStatus;
//! use wordle_rules::game::{GameSession, GameState, GuessError, WordList};
//!
//! let words = WordList::new(["hello", "viola"]);
//! let mut session = GameSession::new("HELLO", words);
//!
//! assert_eq!(
//!     session.submit_guess("hill"),
//!     Err(GuessError::InvalidLength { length: 4 })
//! );
//!
//! let scored = session.submit_guess("viola").unwrap();
//! assert_eq!(scored.letters()[3].status(), LetterStatus::Correct);
//!
//! session.submit_guess("hello").unwrap();
//! assert_eq!(session.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Session rules and the dictionary collaborator
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
