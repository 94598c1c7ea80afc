//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote search index settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Lookup behavior settings
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.backend.endpoint.trim().is_empty() {
            return Err(AppError::config("backend.endpoint is empty"));
        }
        if Url::parse(&self.backend.endpoint).is_err() {
            return Err(AppError::config(format!(
                "backend.endpoint is not a valid URL: {}",
                self.backend.endpoint
            )));
        }
        if self.backend.user_agent.trim().is_empty() {
            return Err(AppError::config("backend.user_agent is empty"));
        }
        if self.backend.timeout_secs == 0 {
            return Err(AppError::config("backend.timeout_secs must be > 0"));
        }
        if self.lookup.max_concurrent == 0 {
            return Err(AppError::config("lookup.max_concurrent must be > 0"));
        }
        Ok(())
    }
}

/// Remote search index connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Search endpoint, queried with `?query=`
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Lookup behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Maximum concurrent lookups in batch mode
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Delay between batch lookups in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_concurrent: defaults::max_concurrent(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

mod defaults {
    // Backend defaults
    pub fn endpoint() -> String {
        "http://localhost:8080/opensearch".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; cdxbridge/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Lookup defaults
    pub fn max_concurrent() -> usize {
        5
    }
    pub fn request_delay() -> u64 {
        100
    }
}
