// src/error.rs

//! Unified error handling for the lookup gateway.

use thiserror::Error;

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// `InvalidRequest` and `NotFound` are expected, user-facing outcomes;
/// `Backend` covers everything that went wrong talking to the remote
/// index and keeps the underlying cause for diagnostics.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required request input missing or malformed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Remote index unreachable or returned an unreadable response
    #[error("backend unavailable: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Backend reachable, but it knows no captures for this URL
    #[error("url {0} not found")]
    NotFound(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::Backend {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

impl AppError {
    /// Create an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a backend error without an underlying cause.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a not-found error for a URL.
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound(url.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_outcomes_are_distinguishable() {
        assert!(matches!(
            AppError::invalid_request("url= param is missing"),
            AppError::InvalidRequest(_)
        ));
        assert!(matches!(
            AppError::not_found("http://example.com"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::backend("connection refused"),
            AppError::Backend { .. }
        ));
    }

    #[test]
    fn test_backend_error_display() {
        let error = AppError::backend("connection refused");
        assert_eq!(error.to_string(), "backend unavailable: connection refused");
    }
}
