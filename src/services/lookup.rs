// src/services/lookup.rs

//! Capture lookup orchestration.
//!
//! Validates the request, builds the backend query, fetches and parses
//! the result feed, normalizes every item, ranks by temporal proximity
//! and projects rows in the requested shape.

use crate::error::{AppError, Result};
use crate::models::{CaptureRecord, Config, LookupRequest, OutputFormat};
use crate::services::feed::{FeedParser, RssFeedParser};
use crate::services::{normalize, query, rank};
use crate::utils::http::{Backend, HttpBackend};
use crate::utils::timestamp::{EARLIEST_DATE, pad_timestamp};
use crate::utils::url::{canonicalize, ensure_scheme};

/// Hard cap on ranked results per lookup.
const MAX_RESULTS: usize = 10_000;

/// Service resolving capture lookups against a remote full-text index.
pub struct LookupService {
    config: Config,
    backend: Box<dyn Backend>,
    parser: Box<dyn FeedParser>,
}

impl LookupService {
    /// Create a service with the default HTTP transport and feed parser.
    pub fn new(config: Config) -> Result<Self> {
        let backend = HttpBackend::new(&config.backend)?;
        Ok(Self::with_collaborators(
            config,
            Box::new(backend),
            Box::new(RssFeedParser),
        ))
    }

    /// Create a service with explicit transport and parser collaborators.
    pub fn with_collaborators(
        config: Config,
        backend: Box<dyn Backend>,
        parser: Box<dyn FeedParser>,
    ) -> Self {
        Self {
            config,
            backend,
            parser,
        }
    }

    /// Resolve a lookup request to ranked capture records.
    pub async fn captures(&self, request: &LookupRequest) -> Result<Vec<CaptureRecord>> {
        if request.url.trim().is_empty() {
            return Err(AppError::invalid_request("url= param is missing"));
        }

        let url = ensure_scheme(request.url.trim());
        let urlkey = canonicalize(&url);

        let mut normalized = request.clone();
        normalized.url = url.clone();
        let query = query::build_query(&normalized);
        let full_url = query::query_url(&self.config.backend.endpoint, &query);
        log::debug!("backend query: {full_url}");

        let bytes = self.backend.fetch(&full_url).await?;
        let items = self.parser.parse(&bytes)?;

        let records: Vec<CaptureRecord> = items
            .iter()
            .map(|item| normalize::normalize(item, &urlkey, &url))
            .collect();
        if records.is_empty() {
            return Err(AppError::not_found(&url));
        }
        log::debug!("{} captures for {url}", records.len());

        // Range lookups rank toward the earliest sentinel, which lists
        // them chronologically
        let target = match &request.closest {
            Some(closest) => pad_timestamp(closest, EARLIEST_DATE),
            None => EARLIEST_DATE.to_string(),
        };
        Ok(rank::rank(records, &target, MAX_RESULTS))
    }

    /// Resolve a lookup request and project one output row per capture.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<Vec<String>> {
        let records = self.captures(request).await?;
        let rows = match request.output {
            OutputFormat::Text => records.iter().map(CaptureRecord::cdx_line).collect(),
            OutputFormat::Json => records
                .iter()
                .map(|record| record.to_json(&request.fields).to_string())
                .collect(),
        };
        Ok(rows)
    }
}
