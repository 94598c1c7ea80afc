// src/utils/http.rs

//! HTTP transport for the remote search index.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::BackendConfig;

/// Byte-level fetch seam over the remote index.
///
/// The orchestrator only needs "give me the response body for this URL".
/// Tests substitute canned bytes; any transport failure surfaces as
/// [`crate::error::AppError::Backend`].
#[async_trait]
pub trait Backend: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &BackendConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// reqwest-backed [`Backend`] implementation.
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend with a client configured from `config`.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
