//! Word lists for validating guesses
//!
//! Provides the embedded default dictionary and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
