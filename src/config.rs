//! Worker configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a hangman worker.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Name of the transport delivering inbound events (part of the
    /// store namespace).
    transport_name: String,

    /// Channel code the game is reachable on, e.g. a USSD code like
    /// `*120*1#` (part of the store namespace, sanitized).
    ussd_code: String,

    /// URL to GET a random word from.
    random_word_url: String,
}

impl HangmanConfig {
    /// Creates a new worker configuration.
    #[instrument(skip(transport_name, ussd_code, random_word_url))]
    pub fn new(
        transport_name: String,
        ussd_code: String,
        random_word_url: String,
    ) -> Self {
        Self {
            transport_name,
            ussd_code,
            random_word_url,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(transport_name = %config.transport_name, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
