//! Errors raised by word sources and validators
//!
//! None of these reach the player: sources fall back to the static table and
//! validators accept on failure. They exist for logging and for tests.

use crate::core::WordError;
use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    /// The remote word API needs a key and none was configured
    MissingApiKey,
    InvalidUrl(String),
    Http(reqwest::Error),
    Status(u16),
    /// A source produced something that is not a usable target word
    InvalidWord { word: String, source: WordError },
    /// A word list has no entries of the requested length
    NoWordsOfLength(usize),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "No API key configured for the word service"),
            Self::InvalidUrl(url) => write!(f, "Invalid service URL: {url}"),
            Self::Http(err) => write!(f, "HTTP request failed: {err}"),
            Self::Status(code) => write!(f, "Unexpected HTTP status {code}"),
            Self::InvalidWord { word, source } => write!(f, "Rejected word '{word}': {source}"),
            Self::NoWordsOfLength(len) => write!(f, "No {len}-letter words available"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(
            ServiceError::Status(503).to_string(),
            "Unexpected HTTP status 503"
        );
        assert_eq!(
            ServiceError::NoWordsOfLength(6).to_string(),
            "No 6-letter words available"
        );
    }

    #[test]
    fn invalid_word_exposes_source() {
        let err = ServiceError::InvalidWord {
            word: "AB1".to_string(),
            source: WordError::InvalidCharacters,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("AB1"));
    }
}
