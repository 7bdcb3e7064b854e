//! Formatting utilities for terminal output

use crate::core::{Guess, Letter, LetterStatus};
use colored::{ColoredString, Colorize};

/// Color one letter tile by its feedback
#[must_use]
pub fn letter_tile(letter: Letter) -> ColoredString {
    let tile = format!(" {} ", letter.as_char());
    match letter.status() {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Unset => tile.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|&letter| letter_tile(letter).to_string())
        .collect()
}

/// Plain-text row for a guess such as "V- I- O? L! A-"
///
/// `!` marks correct letters, `?` present ones and `-` absent ones.
#[must_use]
pub fn plain_row(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|letter| format!("{}{}", letter.as_char(), status_marker(letter.status())))
        .collect::<Vec<_>>()
        .join(" ")
}

const fn status_marker(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '!',
        LetterStatus::Present => '?',
        LetterStatus::Absent => '-',
        LetterStatus::Unset => ' ',
    }
}
