//! Static fallback word lists
//!
//! Used whenever a word source cannot produce a target. Keyed by word length,
//! with a generic fallback for lengths the table does not cover.

pub mod loader;

/// Fallback target words, one list per supported length
pub const FALLBACK_WORDS: &[(usize, &[&str])] = &[
    (4, &["WORD", "PLAY", "GAME", "TEST"]),
    (5, &["WORLD", "PLAYS", "GAMES", "TESTS"]),
    (6, &["WORLDS", "PLAYER", "GAMING", "TESTED"]),
];

/// Used when the table has no list for the requested length
pub const GENERIC_FALLBACK: &[&str] = &["TEST"];

/// Fallback candidates for a given word length
#[must_use]
pub fn fallback_candidates(length: usize) -> &'static [&'static str] {
    FALLBACK_WORDS
        .iter()
        .find(|(len, _)| *len == length)
        .map_or(GENERIC_FALLBACK, |&(_, words)| words)
}
