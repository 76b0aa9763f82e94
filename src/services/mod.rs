//! Collaborators the game depends on: where target words come from, and
//! whether a guess counts as a real word.
//!
//! Both are injected into the game explicitly through [`Services`]. Neither
//! ever fails from the game's point of view:
//! - a [`WordSource`] falls back to the static word table
//! - a [`WordValidator`] accepts the guess when the lookup itself fails

mod error;
mod local;
mod remote;

pub use error::ServiceError;
pub use local::{AcceptAll, FallbackWords, WordListSource, fallback_word};
pub use remote::{
    DEFAULT_DICTIONARY_URL, DEFAULT_WORD_API_URL, DictionaryValidator, RandomWordApi,
};

use crate::core::Word;
use log::{debug, warn};
use std::sync::Arc;

/// Supplies target words
pub trait WordSource: Send + Sync {
    /// Try to produce a target word of exactly `length` letters
    ///
    /// # Errors
    /// Returns a `ServiceError` when the source cannot produce a word.
    fn try_fetch(&self, length: usize) -> Result<Word, ServiceError>;

    /// Produce a target word, falling back to the static table on any failure
    fn fetch(&self, length: usize) -> Word {
        match self.try_fetch(length) {
            Ok(word) if word.len() == length => word,
            Ok(word) => {
                warn!(
                    "word source returned {} letters instead of {length}, using fallback",
                    word.len()
                );
                fallback_word(length)
            }
            Err(err) => {
                warn!("word source failed ({err}), using fallback");
                fallback_word(length)
            }
        }
    }
}

/// Decides whether a guess is an accepted word
pub trait WordValidator: Send + Sync {
    /// Look the candidate up in whatever dictionary backs this validator
    ///
    /// # Errors
    /// Returns a `ServiceError` when the lookup could not be performed.
    fn lookup(&self, candidate: &str) -> Result<bool, ServiceError>;

    /// Accept the target itself, otherwise defer to [`WordValidator::lookup`].
    /// A failed lookup accepts the guess.
    fn check(&self, candidate: &str, target: &Word) -> bool {
        if target.matches(candidate) {
            return true;
        }
        match self.lookup(candidate) {
            Ok(accepted) => {
                debug!("dictionary lookup for {candidate}: {accepted}");
                accepted
            }
            Err(err) => {
                warn!("dictionary lookup for {candidate} failed ({err}), accepting");
                true
            }
        }
    }
}

/// The collaborators handed to a game session
#[derive(Clone)]
pub struct Services {
    pub source: Arc<dyn WordSource>,
    pub validator: Arc<dyn WordValidator>,
}

impl Services {
    #[must_use]
    pub fn new(source: Arc<dyn WordSource>, validator: Arc<dyn WordValidator>) -> Self {
        Self { source, validator }
    }

    /// Static word table and no dictionary
    #[must_use]
    pub fn offline() -> Self {
        Self::new(Arc::new(FallbackWords), Arc::new(AcceptAll))
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl WordSource for Broken {
        fn try_fetch(&self, _length: usize) -> Result<Word, ServiceError> {
            Err(ServiceError::Status(500))
        }
    }

    impl WordValidator for Broken {
        fn lookup(&self, _candidate: &str) -> Result<bool, ServiceError> {
            Err(ServiceError::Status(500))
        }
    }

    struct Fixed(&'static str);

    impl WordSource for Fixed {
        fn try_fetch(&self, _length: usize) -> Result<Word, ServiceError> {
            Ok(Word::new(self.0).unwrap())
        }
    }

    struct Rejects;

    impl WordValidator for Rejects {
        fn lookup(&self, _candidate: &str) -> Result<bool, ServiceError> {
            Ok(false)
        }
    }

    #[test]
    fn failing_source_falls_back_by_length() {
        for length in 4..=6 {
            let word = Broken.fetch(length);
            assert_eq!(word.len(), length);
            assert!(crate::wordlists::fallback_candidates(length).contains(&word.text()));
        }
    }

    #[test]
    fn wrong_length_from_source_falls_back() {
        let word = Fixed("PLANETS").fetch(5);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn source_word_used_when_length_matches() {
        assert_eq!(Fixed("CRANE").fetch(5).text(), "CRANE");
    }

    #[test]
    fn failing_lookup_accepts() {
        let target = Word::new("WORD").unwrap();
        assert!(Broken.check("ZZZZ", &target));
    }

    #[test]
    fn target_always_accepted_case_insensitive() {
        let target = Word::new("WORD").unwrap();
        assert!(Rejects.check("word", &target));
        assert!(!Rejects.check("worm", &target));
    }

    #[test]
    fn offline_services_accept_everything() {
        let services = Services::offline();
        let target = services.source.fetch(5);
        assert!(services.validator.check("QQQQQ", &target));
    }
}
