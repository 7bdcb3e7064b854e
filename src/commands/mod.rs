//! Command implementations

pub mod check;
pub mod replay;
pub mod score;

pub use check::{CheckResult, check_word};
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_game};
pub use score::{ScoreResult, score_guess};
