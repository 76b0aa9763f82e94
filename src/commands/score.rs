//! Score a single guess against a target
//!
//! Runs the verdict calculation on its own, without a game session.

use crate::core::{Verdict, Word};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub verdict: Verdict,
}

/// Compare `guess` with `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess =
        Word::with_length(guess, target.len()).map_err(|e| format!("Invalid guess: {e}"))?;
    let verdict = Verdict::calculate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_duplicate_letters() {
        let result = score_guess("speed", "erase").unwrap();
        assert_eq!(result.verdict.to_string(), "Y-YY-");
        assert_eq!(result.guess.text(), "SPEED");
        assert_eq!(result.target.text(), "ERASE");
    }

    #[test]
    fn score_length_mismatch() {
        let err = score_guess("word", "world").err().unwrap();
        assert!(err.contains("exactly 5"));
    }

    #[test]
    fn score_invalid_target() {
        assert!(score_guess("word", "w0rd").is_err());
    }
}
