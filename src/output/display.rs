//! Printing of boards and results for the line-based mode

use super::formatters::{guess_row, keyboard_lines, verdict_to_emoji};
use crate::core::Verdict;
use crate::game::{Game, MAX_ATTEMPTS, Statistics};
use colored::Colorize;

/// Print every attempt row, including the one being typed
pub fn print_board(game: &Game) {
    println!();
    for attempt in 0..MAX_ATTEMPTS {
        let shown = attempt < game.attempt()
            || game.verdict(attempt).is_some()
            || (attempt == game.attempt() && !game.is_finished());
        if shown {
            println!(
                "  {}",
                guess_row(
                    &game.guesses()[attempt],
                    game.verdict(attempt),
                    game.word_length()
                )
            );
        } else {
            println!("  {}", guess_row("", None, game.word_length()).dimmed());
        }
    }
    println!();
}

pub fn print_keyboard(game: &Game) {
    for line in keyboard_lines(game) {
        println!("  {line}");
    }
    println!();
}

/// Print the result of scoring one guess against a target
pub fn print_score(guess: &str, target: &str, verdict: &Verdict) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.bright_white().bold(),
        target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", guess_row(guess, Some(verdict), guess.len()));
    println!("  {}  {}\n", verdict_to_emoji(verdict), verdict);
}

/// Print the end-of-game banner
pub fn print_game_over(game: &Game) {
    let Some(summary) = game.summary() else {
        return;
    };

    println!("{}", "═".repeat(50).bright_cyan());
    if summary.won {
        println!(
            "{}",
            format!(
                "  🎉 Solved in {} {}!",
                summary.attempts,
                if summary.attempts == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!("{}", "  ❌ Out of attempts".red().bold());
    }
    println!(
        "  The word was {}",
        summary.target.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).bright_cyan());
}

pub fn print_statistics(stats: &Statistics) {
    println!(
        "\n📈 {} played {}, won {} ({:.0}%)",
        "Games:".bright_cyan().bold(),
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    for attempts in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[attempts];
        println!("   {attempts}: {} {count}", "█".repeat(count).green());
    }
    println!();
}
