//! Formatting utilities for terminal output

use crate::core::{KeyState, Mark, Verdict, alphabet::KEYBOARD_ROWS};
use crate::game::Game;
use colored::{ColoredString, Colorize};

/// Format a verdict as emoji string
#[must_use]
pub fn verdict_to_emoji(verdict: &Verdict) -> String {
    verdict.to_emoji()
}

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let tile = format!(" {letter} ");
    match mark {
        Some(Mark::Exact) => tile.black().on_green().bold(),
        Some(Mark::Elsewhere) => tile.black().on_yellow().bold(),
        Some(Mark::Absent) => tile.white().on_bright_black(),
        None => tile.bright_white().bold(),
    }
}

/// Render a guess row: evaluated tiles when a verdict exists, plain letters otherwise
#[must_use]
pub fn guess_row(guess: &str, verdict: Option<&Verdict>, width: usize) -> String {
    let letters: Vec<char> = guess.chars().collect();
    (0..width)
        .map(|i| {
            let letter = letters.get(i).copied().unwrap_or('_');
            let mark = verdict.and_then(|v| v.marks().get(i).copied());
            letter_tile(letter, mark).to_string()
        })
        .collect()
}

/// Render a keyboard key according to what is known about it
#[must_use]
pub fn key(letter: char, state: KeyState) -> ColoredString {
    let label = letter.to_string();
    match state {
        KeyState::Exact => label.black().on_green(),
        KeyState::Elsewhere => label.black().on_yellow(),
        KeyState::Absent => label.bright_black(),
        KeyState::Unused => label.white(),
    }
}

/// Keyboard rows, offset like a physical keyboard
#[must_use]
pub fn keyboard_lines(game: &Game) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, keys)| {
            let keys: Vec<String> = keys
                .chars()
                .map(|c| key(c, game.key_state(c)).to_string())
                .collect();
            format!("{}{}", " ".repeat(row), keys.join(" "))
        })
        .collect()
}
