//! Remote API connection settings.
//!
//! The settings file is the JSON object the API credentials are distributed
//! in: `{"url", "apiKey", "hash", "ts", "dataMax"}`. The same keys are
//! accepted under `[api]` in the CLI's TOML config.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest page size the API serves
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default timeout for a single request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote catalog API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Base URL, e.g. `https://gateway.marvel.com/v1/public`
    pub url: String,

    /// Public API key
    pub api_key: String,

    /// Precomputed request hash for `ts`
    pub hash: String,

    /// Timestamp the hash was computed for
    pub ts: String,

    /// Page size used for paginated requests
    #[serde(default = "default_data_max")]
    pub data_max: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_data_max() -> u32 {
    MAX_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ApiConfig {
    /// Load settings from a JSON file
    ///
    /// # Errors
    /// Returns `ConfigNotFound` if the file does not exist, `Json` if it does
    /// not parse, and `InvalidConfig` if a value is out of range.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ApiError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: ApiConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ApiError::InvalidConfig("url cannot be empty".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(ApiError::InvalidConfig("apiKey cannot be empty".to_string()));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.data_max) {
            return Err(ApiError::InvalidConfig(format!(
                "dataMax must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.data_max
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ApiError::InvalidConfig("timeoutSecs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
