//! Wordle Game
//!
//! A Wordle-style guessing game: find a hidden 4 to 6 letter word in five
//! attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, SubmitOutcome};
//! use wordle_game::services::AcceptAll;
//!
//! let mut game = Game::new(Word::new("world").unwrap(), Arc::new(AcceptAll));
//! for letter in "words".chars() {
//!     game.add_letter(letter);
//! }
//!
//! match game.submit() {
//!     SubmitOutcome::Continue(verdict) => assert_eq!(verdict.to_string(), "GGGY-"),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! assert_eq!(game.remaining_attempts(), 3);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word sources and dictionary validation
pub mod services;

// Fallback word tables and list loading
pub mod wordlists;

// Runtime configuration
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
