//! Simple line-based game mode
//!
//! Plays full games over any `BufRead`, one guess per line, without the TUI.

use crate::game::{Game, MAX_ATTEMPTS, Statistics, SubmitOutcome};
use crate::output::{print_board, print_game_over, print_keyboard, print_statistics};
use crate::services::Services;
use colored::Colorize;
use std::io::{BufRead, Write};

enum LineInput {
    Guess(String),
    NewGame,
    Hint,
    Quit,
}

fn parse_line(line: &str) -> LineInput {
    match line.trim().to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => LineInput::Quit,
        ":new" | ":n" => LineInput::NewGame,
        ":hint" | ":h" => LineInput::Hint,
        other => LineInput::Guess(other.to_string()),
    }
}

fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    std::io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;
    Ok((read > 0).then_some(input))
}

/// Replace whatever is in the current slot with `guess`, letter by letter
fn enter_guess(game: &mut Game, guess: &str) {
    while !game.current_guess().is_empty() {
        game.delete_letter();
    }
    for letter in guess.chars() {
        game.add_letter(letter);
    }
}

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: BufRead>(
    services: &Services,
    word_length: usize,
    mut reader: R,
) -> Result<Statistics, String> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║              W O R D L E                     ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the {word_length}-letter word in {MAX_ATTEMPTS} tries.");
    println!("Commands: ':new' new game, ':hint' reveal letters, ':quit' exit\n");

    let mut game = Game::start(services, word_length);
    let mut stats = Statistics::default();

    loop {
        print_board(&game);
        print_keyboard(&game);

        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", game.attempt() + 1);
        let Some(line) = read_line(&mut reader, &prompt)? else {
            break;
        };

        let guess = match parse_line(&line) {
            LineInput::Quit => break,
            LineInput::NewGame => {
                game.restart(services.source.as_ref());
                println!("\n🔄 New game started!");
                continue;
            }
            LineInput::Hint => {
                println!("\n💡 Hint: {}", game.progressive_hint().bright_yellow());
                continue;
            }
            LineInput::Guess(guess) => guess,
        };

        if guess.len() != game.word_length() || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            println!(
                "{}",
                format!("Please enter exactly {} letters.", game.word_length()).red()
            );
            continue;
        }

        enter_guess(&mut game, &guess);
        match game.submit() {
            SubmitOutcome::Rejected => {
                println!("{}", "Please enter a valid word!".red());
            }
            SubmitOutcome::Won(_) | SubmitOutcome::Lost(_) => {
                print_board(&game);
                print_game_over(&game);
                if let Some(summary) = game.summary() {
                    stats.record(&summary);
                }

                let again = read_line(&mut reader, "Play again? (yes/no)")?;
                match again.as_deref().map(|s| s.trim().to_lowercase()).as_deref() {
                    Some("yes" | "y") => {
                        game.restart(services.source.as_ref());
                        println!("\n🔄 New game started!");
                    }
                    _ => break,
                }
            }
            SubmitOutcome::Continue(_) | SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
        }
    }

    print_statistics(&stats);
    println!("👋 Thanks for playing!\n");
    Ok(stats)
}
