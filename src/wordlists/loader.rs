//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded dictionary.

use super::DICTIONARY;
use crate::core::SecretWord;
use crate::game::WordList;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load a word list from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored;
/// anything that is not exactly five ASCII letters is skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_rules::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut words = WordList::default();
    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match SecretWord::parse(trimmed) {
            Ok(word) => {
                words.insert(word.as_str());
            }
            Err(err) => warn!(
                path = %path.display(),
                line = number + 1,
                "skipping '{trimmed}': {err}"
            ),
        }
    }

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to a word list
///
/// # Examples
/// ```
/// use wordle_rules::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    slice.iter().collect()
}

/// The embedded default dictionary as a word list
#[must_use]
pub fn embedded() -> WordList {
    words_from_slice(DICTIONARY)
}
