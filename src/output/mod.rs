//! Terminal output formatting
//!
//! Display utilities for the line-based mode and the score command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_keyboard, print_score, print_statistics};
