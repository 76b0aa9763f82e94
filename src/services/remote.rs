//! Network-backed collaborators
//!
//! Blocking HTTP clients with a request timeout. Callers that must stay
//! responsive run them off the UI thread.

use super::{ServiceError, WordSource, WordValidator};
use crate::core::Word;
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_WORD_API_URL: &str = "https://random-word-api.p.rapidapi.com";
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

fn build_client(timeout: Duration) -> Result<Client, ServiceError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
}

/// Random word API (`GET {base}/L/{length}` returning `{"word": "..."}`)
#[derive(Debug, Clone)]
pub struct RandomWordApi {
    client: Client,
    base_url: String,
    host: String,
    api_key: Option<String>,
}

impl RandomWordApi {
    /// # Errors
    /// Returns an error if the URL has no host or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let host = reqwest::Url::parse(base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .ok_or_else(|| ServiceError::InvalidUrl(base_url.to_string()))?;

        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base(base_url),
            host,
            api_key,
        })
    }
}

impl WordSource for RandomWordApi {
    fn try_fetch(&self, length: usize) -> Result<Word, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or(ServiceError::MissingApiKey)?;
        let url = format!("{}/L/{length}", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", &self.host)
            .send()?;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status().as_u16()));
        }

        let body: WordResponse = response.json()?;
        debug!("word service returned a {}-letter word", body.word.len());

        Word::with_length(&body.word, length).map_err(|source| ServiceError::InvalidWord {
            word: body.word,
            source,
        })
    }
}

/// Dictionary lookup (`GET {base}/{word}`): found is 2xx, unknown is 404
#[derive(Debug, Clone)]
pub struct DictionaryValidator {
    client: Client,
    base_url: String,
}

impl DictionaryValidator {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base(base_url),
        })
    }
}

impl WordValidator for DictionaryValidator {
    fn lookup(&self, candidate: &str) -> Result<bool, ServiceError> {
        let candidate = candidate.trim();
        if candidate.is_empty() || !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(false);
        }

        let url = format!("{}/{}", self.base_url, candidate.to_ascii_lowercase());
        let status = self.client.get(&url).send()?.status();

        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            Err(ServiceError::Status(status.as_u16()))
        }
    }
}
