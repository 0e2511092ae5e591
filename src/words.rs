//! Word source for new games.
//!
//! A new game needs one fresh word. The production source is a plain
//! HTTP GET against a configured URL that returns the word as text;
//! the trait seam lets tests substitute a fixed-word fake.

use async_trait::async_trait;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Word source error (network failure, HTTP error, empty result).
#[derive(Debug, Clone, Display, Error)]
#[display("Word source error: {} at {}:{}", message, file, line)]
pub struct WordSourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordSourceError {
    /// Creates a new word source error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for WordSourceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request error: {}", err))
    }
}

/// Supplies a fresh word for a new game.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetches one word, already normalized to lowercase letters.
    async fn fetch_word(&self) -> Result<String, WordSourceError>;
}

/// Word source that GETs a random word from a configured URL.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    url: String,
    client: reqwest::Client,
}

impl HttpWordSource {
    /// Creates a word source for the given URL.
    #[instrument(skip(url))]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        info!(%url, "Creating HTTP word source");
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        debug!("Fetching random word");
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        let word = normalize_word(&body);
        if word.is_empty() {
            return Err(WordSourceError::new("word source returned no word"));
        }
        info!(len = word.len(), "Fetched word");
        Ok(word)
    }
}

/// Normalizes raw word-source bytes into a playable word.
///
/// Decodes permissively (invalid UTF-8 sequences are dropped, not
/// fatal), strips leading byte-order marks, trims surrounding
/// whitespace, and lowercases.
pub fn normalize_word(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let text = text.replace('\u{fffd}', "");
    text.trim_start_matches(['\u{feff}', '\u{fffe}'])
        .trim()
        .to_lowercase()
}
