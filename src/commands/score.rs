//! Single guess scoring command
//!
//! Scores one guess against a secret word without a dictionary or session.

use crate::core::{Guess, SecretWord, WORD_LENGTH};
use crate::game::GuessError;
use anyhow::{Context, Result};

/// Result of scoring a single guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: SecretWord,
    pub guess: Guess,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not exactly five ASCII letters
/// - The guess does not normalize to exactly five letters
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = SecretWord::parse(secret).context("Invalid secret word")?;

    let normalized = Guess::normalize(guess);
    if normalized.len() != WORD_LENGTH {
        return Err(GuessError::InvalidLength {
            length: normalized.len(),
        })
        .context(format!("Invalid guess '{guess}'"));
    }

    let guess = normalized.score(&secret);
    Ok(ScoreResult { secret, guess })
}
