//! HTTP fetcher implementation
//!
//! This module handles every request the crawler makes:
//! - Building the HTTP client with the configured user agent and timeouts
//! - Fetching a listing page and parsing it into a [`Document`]
//! - Classifying failures into [`MatrixError::Fetch`]
//!
//! There is no retry logic. One failed request aborts the run.

use crate::config::{HttpConfig, UserAgentConfig};
use crate::crawler::parser::Document;
use crate::MatrixError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Retrieves a listing page as a queryable document
///
/// Implementations perform exactly one read per call and do not cache.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches and parses the page at `url`
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - The parsed page
    /// * `Err(MatrixError::Fetch)` - Network failure or non-success status
    async fn fetch(&self, url: &str) -> Result<Document, MatrixError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `http` - Timeouts
/// * `user_agent` - User agent identification
///
/// # Example
///
/// ```no_run
/// use openwrt_job_matrix::config::{HttpConfig, UserAgentConfig};
/// use openwrt_job_matrix::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    http: &HttpConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a fetcher with a freshly built client
    pub fn from_config(
        http: &HttpConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, MatrixError> {
        let client = build_http_client(http, user_agent)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Document, MatrixError> {
        tracing::debug!("Fetching {}", url);

        let body = fetch_html(&self.client, url).await.map_err(|reason| {
            tracing::error!("Error fetching HTML for {}: {}", url, reason);
            MatrixError::Fetch {
                url: url.to_string(),
                reason,
            }
        })?;

        Ok(Document::parse(&body))
    }
}

/// Sends a single GET and returns the body of a successful response
///
/// The error is a human-readable reason; the caller attaches the URL.
async fn fetch_html(client: &Client, url: &str) -> Result<String, String> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            "Request timeout".to_string()
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            e.to_string()
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status.as_u16()));
    }

    response.text().await.map_err(|e| e.to_string())
}
