//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI, a plain line mode, and a one-off scorer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wordle_game::{
    commands::{run_simple, score_guess},
    config::{DEFAULT_TIMEOUT, DEFAULT_WORD_LENGTH, GameConfig},
    logging::{self, LogTarget},
    output::{print_score, print_statistics},
    services::{DEFAULT_DICTIONARY_URL, DEFAULT_WORD_API_URL},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in five tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 4, 5 or 6
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Never touch the network: fallback words, every guess accepted
    #[arg(long, global = true)]
    offline: bool,

    /// API key for the random word service
    #[arg(long, global = true, env = "WORDLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the random word service
    #[arg(long, global = true, default_value = DEFAULT_WORD_API_URL)]
    word_api_url: String,

    /// Base URL of the dictionary used to validate guesses
    #[arg(long, global = true, default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    /// Network timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Draw targets from a word list file (one word per line) instead of the service
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score one guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            word_length: self.length,
            offline: self.offline,
            api_key: self.api_key.clone(),
            word_api_url: self.word_api_url.clone(),
            dictionary_url: self.dictionary_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            word_list: self.words.clone(),
        }
    }

    fn log_target(&self, command: &Commands) -> LogTarget {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Play) => LogTarget::Off,
            (None, _) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    logging::init(&cli.log_target(&command))?;

    match command {
        Commands::Play => run_play_command(&cli.game_config()),
        Commands::Simple => run_simple_command(&cli.game_config()),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let services = config.build_services()?;
    let app = App::new(services, config.word_length);
    let stats = run_tui(app)?;
    print_statistics(&stats);
    Ok(())
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let services = config.build_services()?;
    let stdin = std::io::stdin();
    run_simple(&services, config.word_length, stdin.lock()).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_score(result.guess.text(), result.target.text(), &result.verdict);
    Ok(())
}
