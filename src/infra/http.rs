//! Public config transport.
//!
//! The loader only depends on [`PublicConfigSource`]; the reqwest-backed
//! [`HttpConfigSource`] is the production implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, PRAGMA};
use serde_json::Value;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Anything that can produce the raw public config document.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PublicConfigSource: Send + Sync {
    /// Fetch and decode the document. No validation happens here.
    async fn fetch(&self) -> AppResult<Value>;
}

/// `GET {base}/public-config` with caching disabled.
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    client: reqwest::Client,
    url: String,
}

impl HttpConfigSource {
    /// Build a client bounded by the configured network timeout.
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.network_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self::with_client(client, config.public_config_url()))
    }

    /// Use an existing client, e.g. one shared with other requests.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PublicConfigSource for HttpConfigSource {
    async fn fetch(&self) -> AppResult<Value> {
        tracing::debug!(url = %self.url, "Fetching public config");

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AppError::decode(e.to_string()))
    }
}
