//! Display functions for command results

use super::formatters::{guess_row, plain_row};
use crate::commands::{CheckResult, ReplayResult, ReplayStep, ScoreResult};
use crate::game::{GameState, MAX_GUESSES};
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\nSecret: {}",
        result.secret.as_str().bright_yellow().bold()
    );
    println!("\n  {}   {}", guess_row(&result.guess), result.guess.to_emoji());
    println!("  {}", plain_row(&result.guess).bright_black());
}

/// Print the result of replaying a game
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}",
        result.secret.as_str().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let mut turn = 0;
    for step in &result.steps {
        match step {
            ReplayStep::Accepted(guess) => {
                turn += 1;
                println!("\nTurn {turn}: {}   {}", guess_row(guess), guess.to_emoji());
            }
            ReplayStep::Rejected { input, error } => {
                println!("\n{} '{input}': {error}", "Rejected".red());
            }
        }
    }

    println!();
    match result.state {
        GameState::Won => println!(
            "{}",
            format!("✅ Solved in {}/{MAX_GUESSES}", result.guesses_made)
                .green()
                .bold()
        ),
        GameState::Lost => println!(
            "{}",
            format!("❌ Out of guesses, the word was {}", result.secret)
                .red()
                .bold()
        ),
        GameState::InProgress => println!(
            "{}",
            format!(
                "… Game in progress, {} guesses left",
                MAX_GUESSES - result.guesses_made
            )
            .yellow()
        ),
    }

    if !result.share_grid.is_empty() {
        println!("\n{}", result.share_grid);
    }
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    match &result.rejection {
        None => println!("{} {}", result.word.bold(), "is a valid guess".green()),
        Some(error) => println!("{} {}", "Rejected:".red(), error),
    }
}
