//! Guess evaluation
//!
//! A verdict holds one mark per letter position of a submitted guess:
//! - `Exact` = letter in the correct position (green)
//! - `Elsewhere` = letter in the word, wrong position (yellow)
//! - `Absent` = letter not in the word, or all its occurrences already claimed (gray)

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Elsewhere,
    Absent,
}

impl Mark {
    /// Single-character code used in text output ('G', 'Y', '-')
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Elsewhere => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Elsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Elsewhere),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Per-position feedback for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verdict(Vec<Mark>);

impl Verdict {
    /// Calculate the verdict when `guess` is played against `target`
    ///
    /// Handles duplicate letters the way Wordle does: a target letter is
    /// credited at most once.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass, left to right: mark a letter `Elsewhere` if an unclaimed
    ///    occurrence remains in the pool and claim it, otherwise `Absent`
    ///
    /// Both words are expected to have the same length; guess positions past
    /// the end of the target are `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Mark, Verdict, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let verdict = Verdict::calculate(&guess, &target);
    ///
    /// // S(yellow) P(gray) E(yellow) E(yellow) D(gray)
    /// assert_eq!(verdict.to_string(), "Y-YY-");
    /// assert_eq!(verdict.marks()[1], Mark::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut marks = vec![Mark::Absent; guess_letters.len()];
        let mut available = target.char_counts();

        // First pass: exact position matches
        for (i, &letter) in guess_letters.iter().enumerate() {
            if target_letters.get(i) == Some(&letter) {
                marks[i] = Mark::Exact;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, claimed from what is left
        for (i, &letter) in guess_letters.iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                marks[i] = Mark::Elsewhere;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    #[must_use]
    pub fn count_elsewhere(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Elsewhere).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

/// Parse a verdict from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .map(Mark::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| format!("Invalid verdict string: {s}"))?;

        if marks.is_empty() {
            return Err("Empty verdict string".to_string());
        }
        Ok(Self(marks))
    }
}
