//! Dictionary lookup used to accept or reject guesses

use crate::core::text;
use rustc_hash::FxHashSet;

/// Answers whether a candidate is an acceptable guess word
///
/// Sessions always pass uppercase ASCII text. Closures work as dictionaries
/// too, which keeps tests and ad hoc callers short:
///
/// ```
/// use wordle_rules::game::Dictionary;
///
/// let only_hello = |word: &str| word == "HELLO";
/// assert!(only_hello.is_word("HELLO"));
/// assert!(!only_hello.is_word("VIOLA"));
/// ```
pub trait Dictionary {
    fn is_word(&self, candidate: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_word(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// In-memory set of accepted words, compared case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from any iterator of words
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::game::{Dictionary, WordList};
    ///
    /// let words = WordList::new(["hello", "Viola"]);
    /// assert!(words.is_word("HELLO"));
    /// assert!(words.is_word("viola"));
    /// assert!(!words.is_word("HGDLE"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add a word, returning `false` if it was already known
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(text::uppercase(word.trim()))
    }

    /// Iterate over the stored (uppercase) words in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordList {
    fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(&text::uppercase(candidate))
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::default();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl<S: AsRef<str>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
