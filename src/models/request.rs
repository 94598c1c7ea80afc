//! Lookup request structure.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::AppError;

/// Output projection for lookup results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One CDX text line per capture
    #[default]
    Text,

    /// One JSON object per capture
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_request(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// A capture lookup request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupRequest {
    /// URL whose captures are wanted
    pub url: String,

    /// Target timestamp for a closest-date lookup (1-14 digits)
    #[serde(default)]
    pub closest: Option<String>,

    /// Lower bound for a range lookup, ignored when `closest` is set
    #[serde(default)]
    pub from: Option<String>,

    /// Upper bound for a range lookup, ignored when `closest` is set
    #[serde(default)]
    pub to: Option<String>,

    /// Output shape
    #[serde(default)]
    pub output: OutputFormat,

    /// Field restriction for json output; empty means all fields
    #[serde(default)]
    pub fields: Vec<String>,
}

impl LookupRequest {
    /// Plain range request for a URL with all defaults.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}
