//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and testable.

pub mod alphabet;
mod classification;
mod verdict;
mod word;

pub use classification::{KeyState, LetterClassification};
pub use verdict::{Mark, Verdict};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
