//! Accumulated letter knowledge across attempts, used to color the keyboard.

use super::{Mark, Verdict, Word};
use rustc_hash::FxHashSet;

/// What the player knows about a single keyboard letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyState {
    Unused,
    Absent,
    Elsewhere,
    Exact,
}

/// Exact, elsewhere and absent letter sets.
///
/// Exact takes priority over elsewhere, and a letter is only absent if it was
/// never credited anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterClassification {
    exact: FxHashSet<u8>,
    elsewhere: FxHashSet<u8>,
    absent: FxHashSet<u8>,
}

impl LetterClassification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the sets
    pub fn record(&mut self, guess: &Word, verdict: &Verdict) {
        let pairs: Vec<(u8, Mark)> = guess
            .letters()
            .iter()
            .copied()
            .zip(verdict.marks().iter().copied())
            .collect();

        for &(letter, _) in pairs.iter().filter(|(_, m)| *m == Mark::Exact) {
            self.elsewhere.remove(&letter);
            self.absent.remove(&letter);
            self.exact.insert(letter);
        }

        for &(letter, _) in pairs.iter().filter(|(_, m)| *m == Mark::Elsewhere) {
            if !self.exact.contains(&letter) {
                self.absent.remove(&letter);
                self.elsewhere.insert(letter);
            }
        }

        for &(letter, _) in pairs.iter().filter(|(_, m)| *m == Mark::Absent) {
            if !self.exact.contains(&letter) && !self.elsewhere.contains(&letter) {
                self.absent.insert(letter);
            }
        }
    }

    /// Display state of a key, highest priority first
    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        if !letter.is_ascii_alphabetic() {
            return KeyState::Unused;
        }
        let letter = letter.to_ascii_uppercase() as u8;

        if self.exact.contains(&letter) {
            KeyState::Exact
        } else if self.elsewhere.contains(&letter) {
            KeyState::Elsewhere
        } else if self.absent.contains(&letter) {
            KeyState::Absent
        } else {
            KeyState::Unused
        }
    }

    #[must_use]
    pub fn exact(&self) -> &FxHashSet<u8> {
        &self.exact
    }

    #[must_use]
    pub fn elsewhere(&self) -> &FxHashSet<u8> {
        &self.elsewhere
    }

    #[must_use]
    pub fn absent(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    pub fn clear(&mut self) {
        self.exact.clear();
        self.elsewhere.clear();
        self.absent.clear();
    }
}
