//! Wordle Rules - CLI
//!
//! Scores guesses and replays games against the rules engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_rules::{
    commands::{ReplayConfig, check_word, replay_game, score_guess},
    game::WordList,
    output::{print_check_result, print_replay_result, print_score_result},
    wordlists::loader::{embedded, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_rules",
    about = "Wordle rules engine: score guesses and replay games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score (need not be in the word list)
        guess: String,
    },

    /// Replay a sequence of guesses through a full game
    Replay {
        /// The secret word
        secret: String,

        /// Guesses in submission order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Check whether a word is accepted as a guess
    Check {
        /// Word to check
        word: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(embedded()),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wordle_rules=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess)?;
            print_score_result(&result);
        }
        Commands::Replay { secret, guesses } => {
            let dictionary = load_wordlist(&cli.wordlist)?;
            let result = replay_game(ReplayConfig::new(secret, guesses), dictionary)?;
            print_replay_result(&result);
        }
        Commands::Check { word } => {
            let dictionary = load_wordlist(&cli.wordlist)?;
            print_check_result(&check_word(&word, &dictionary));
        }
    }

    Ok(())
}
