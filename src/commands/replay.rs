//! Game replay command
//!
//! Plays a list of guesses through a game session and collects the outcome.

use crate::core::{Guess, SecretWord};
use crate::game::{Dictionary, GameSession, GameState, GuessError};
use anyhow::{Context, Result};
use tracing::info;

/// Configuration for replaying a game
#[derive(Debug)]
pub struct ReplayConfig {
    pub secret: String,
    pub guesses: Vec<String>,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(secret: String, guesses: Vec<String>) -> Self {
        Self { secret, guesses }
    }
}

/// What happened to one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    Accepted(Guess),
    Rejected { input: String, error: GuessError },
}

/// Result of replaying a game
#[derive(Debug)]
pub struct ReplayResult {
    pub secret: SecretWord,
    pub steps: Vec<ReplayStep>,
    pub state: GameState,
    pub guesses_made: usize,
    pub share_grid: String,
}

impl ReplayResult {
    /// Number of submissions the session refused
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ReplayStep::Rejected { .. }))
            .count()
    }
}

/// Submit every guess of `config` to a fresh session
///
/// Rejected guesses are recorded rather than aborting the replay, so the
/// result shows exactly what the session accepted.
///
/// # Errors
///
/// Returns an error if the secret word is not exactly five ASCII letters.
pub fn replay_game<D: Dictionary>(config: ReplayConfig, dictionary: D) -> Result<ReplayResult> {
    let secret = SecretWord::parse(&config.secret).context("Invalid secret word")?;
    let mut session = GameSession::with_secret(secret, dictionary);

    let steps = config
        .guesses
        .into_iter()
        .map(|input| match session.submit_guess(&input) {
            Ok(guess) => ReplayStep::Accepted(guess.clone()),
            Err(error) => ReplayStep::Rejected { input, error },
        })
        .collect();

    let state = session.state();
    info!(?state, guesses = session.guesses_made(), "replay finished");

    Ok(ReplayResult {
        secret: session.secret().clone(),
        steps,
        state,
        guesses_made: session.guesses_made(),
        share_grid: session.share_grid(),
    })
}
