//! Text normalization shared by guesses, secrets and dictionaries
//!
//! Every comparison in the engine happens on uppercase ASCII text, so all
//! conversions go through these two helpers.

/// Upper-case ASCII letters, leaving every other character untouched
///
/// # Examples
/// ```
/// use wordle_rules::core::text::uppercase;
///
/// assert_eq!(uppercase("Hello!"), "HELLO!");
/// ```
#[must_use]
pub fn uppercase(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Upper-case ASCII letters and drop everything else
///
/// Digits, punctuation, whitespace and non-ASCII characters are removed, so
/// the result only ever contains `A-Z`.
///
/// # Examples
/// ```
/// use wordle_rules::core::text::normalize;
///
/// assert_eq!(normalize(" h-e l1lo "), "HELLO");
/// assert_eq!(normalize("héllo"), "HLLO");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
