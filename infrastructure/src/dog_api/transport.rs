//! HTTP transport for the dog.ceo adapter
//!
//! The provider only needs "GET this URL and give me the body", so that is
//! the whole seam. [`ReqwestTransport`] is the real implementation; tests
//! substitute canned bodies.

use super::error::{DogApiError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("guess-the-breed/", env!("CARGO_PKG_VERSION"));

/// Minimal HTTP GET capability
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url` and return the body of a 2xx response
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DogApiError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} returned {}", url, status);
            return Err(DogApiError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
