//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section falls back to its defaults when omitted.

use crate::dog_api::provider::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("api.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("quiz.rounds cannot be 0")]
    InvalidRounds,
}

/// Raw dog.ceo API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Host serving the dog.ceo API
    pub base_url: String,
    /// Timeout in seconds for each HTTP request
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Seed for breed selection; random when unset
    pub seed: Option<u64>,
    /// Number of rounds to play; unlimited when unset
    pub rounds: Option<u32>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a question loads
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
    pub quiz: FileQuizConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if let Err(e) = reqwest::Url::parse(base_url) {
            return Err(ConfigValidationError::InvalidBaseUrl(e.to_string()));
        }

        if self.quiz.rounds == Some(0) {
            return Err(ConfigValidationError::InvalidRounds);
        }

        Ok(())
    }
}
