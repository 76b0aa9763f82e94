//! Offline collaborators: the static fallback table, user word lists, and
//! the accept-everything validator.

use super::{ServiceError, WordSource, WordValidator};
use crate::core::Word;
use crate::wordlists::{fallback_candidates, loader::load_from_file};
use rand::prelude::IndexedRandom;
use std::io;
use std::path::Path;

/// Pick a random word from the static fallback table
///
/// Lengths missing from the table get the generic fallback word, which may have
/// a different length.
///
/// # Panics
/// Will not panic - the fallback table only holds valid words (checked in tests).
#[must_use]
pub fn fallback_word(length: usize) -> Word {
    let candidates = fallback_candidates(length);
    let choice = candidates.choose(&mut rand::rng()).copied().unwrap_or("TEST");
    Word::new(choice).expect("fallback table holds only valid words")
}

/// Word source backed only by the static fallback table
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackWords;

impl WordSource for FallbackWords {
    fn try_fetch(&self, length: usize) -> Result<Word, ServiceError> {
        Ok(fallback_word(length))
    }
}

/// Word source that picks from a user-supplied list
#[derive(Debug, Clone)]
pub struct WordListSource {
    words: Vec<Word>,
}

impl WordListSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Load a newline-delimited word file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordListSource {
    fn try_fetch(&self, length: usize) -> Result<Word, ServiceError> {
        let matching: Vec<&Word> = self.words.iter().filter(|w| w.len() == length).collect();
        matching
            .choose(&mut rand::rng())
            .map(|&w| w.clone())
            .ok_or(ServiceError::NoWordsOfLength(length))
    }
}

/// Validator that accepts every guess
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordValidator for AcceptAll {
    fn lookup(&self, _candidate: &str) -> Result<bool, ServiceError> {
        Ok(true)
    }
}
