//! Game configuration
//!
//! Everything the binary collects from flags and environment, and the
//! construction of the injected services from it.

use crate::services::{
    AcceptAll, DEFAULT_DICTIONARY_URL, DEFAULT_WORD_API_URL, DictionaryValidator, FallbackWords,
    RandomWordApi, Services, WordListSource, WordSource, WordValidator,
};
use anyhow::{Context, Result, bail};
use log::info;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Word lengths a player can choose from
pub const SUPPORTED_LENGTHS: RangeInclusive<usize> = 4..=6;

pub const DEFAULT_WORD_LENGTH: usize = 5;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct GameConfig {
    pub word_length: usize,
    /// Never touch the network: static word table, every guess accepted
    pub offline: bool,
    pub api_key: Option<String>,
    pub word_api_url: String,
    pub dictionary_url: String,
    pub timeout: Duration,
    /// Custom target word list, used instead of the word API
    pub word_list: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            offline: false,
            api_key: None,
            word_api_url: DEFAULT_WORD_API_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            word_list: None,
        }
    }
}

impl fmt::Debug for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameConfig")
            .field("word_length", &self.word_length)
            .field("offline", &self.offline)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("word_api_url", &self.word_api_url)
            .field("dictionary_url", &self.dictionary_url)
            .field("timeout", &self.timeout)
            .field("word_list", &self.word_list)
            .finish()
    }
}

impl GameConfig {
    /// Offline configuration for a given word length
    #[must_use]
    pub fn offline(word_length: usize) -> Self {
        Self {
            word_length,
            offline: true,
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns an error if the word length is not supported or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_LENGTHS.contains(&self.word_length) {
            bail!(
                "Word length must be between {} and {}, got {}",
                SUPPORTED_LENGTHS.start(),
                SUPPORTED_LENGTHS.end(),
                self.word_length
            );
        }
        if self.timeout.is_zero() {
            bail!("Network timeout must be greater than zero");
        }
        Ok(())
    }

    /// Build the word source and validator this configuration asks for
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, the word list cannot be
    /// read, or an HTTP client cannot be constructed.
    pub fn build_services(&self) -> Result<Services> {
        self.validate()?;

        let source: Arc<dyn WordSource> = if let Some(path) = &self.word_list {
            let list = WordListSource::from_file(path)
                .with_context(|| format!("Failed to load word list from {}", path.display()))?;
            info!("loaded {} words from {}", list.len(), path.display());
            Arc::new(list)
        } else if self.offline || self.api_key.is_none() {
            Arc::new(FallbackWords)
        } else {
            Arc::new(
                RandomWordApi::new(&self.word_api_url, self.api_key.clone(), self.timeout)
                    .context("Failed to set up the word service")?,
            )
        };

        let validator: Arc<dyn WordValidator> = if self.offline {
            Arc::new(AcceptAll)
        } else {
            Arc::new(
                DictionaryValidator::new(&self.dictionary_url, self.timeout)
                    .context("Failed to set up the dictionary service")?,
            )
        };

        Ok(Services::new(source, validator))
    }
}
