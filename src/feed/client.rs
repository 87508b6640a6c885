//! HTTP client for the health feed.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::FeedConfig;
use crate::error::{SteerError, SteerResult};
use crate::feed::types::{Endpoint, FeedEnvelope};
use crate::feed::EndpointSource;

/// Longest slice of a response body quoted in a diagnostic.
const BODY_EXCERPT_CHARS: usize = 200;

/// Fetches the endpoint list over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedClient {
    /// Create a client for the `[feed]` configuration section.
    pub fn new(config: &FeedConfig) -> SteerResult<Self> {
        // The system proxy may well be the very backend being steered.
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SteerError::FeedUnavailable(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.endpoints_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl EndpointSource for HttpFeedClient {
    async fn fetch_endpoints(&self) -> SteerResult<Vec<Endpoint>> {
        tracing::debug!(url = %self.url, "Fetching endpoint list");

        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SteerError::FeedUnavailable(format!("failed to GET {}: {e}", self.url)))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| SteerError::FeedUnavailable(format!("failed to read body from {}: {e}", self.url)))?;

        if !status.is_success() {
            return Err(SteerError::FeedUnavailable(format!(
                "HTTP error {} for {}: {}",
                status.as_u16(),
                self.url,
                excerpt(&body)
            )));
        }

        let endpoints = decode_endpoints(&body)?;
        tracing::debug!(count = endpoints.len(), "Endpoint list received");
        Ok(endpoints)
    }
}

/// Decode a feed response body into its endpoint list.
pub fn decode_endpoints(body: &str) -> SteerResult<Vec<Endpoint>> {
    let envelope: FeedEnvelope = serde_json::from_str(body)
        .map_err(|e| SteerError::FeedUnavailable(format!("malformed feed response: {e}")))?;

    if envelope.success != Some(true) {
        return Err(SteerError::FeedRejected(excerpt(body)));
    }

    envelope
        .data
        .ok_or_else(|| SteerError::FeedUnavailable("feed response has no data list".to_string()))
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() > BODY_EXCERPT_CHARS {
        let cut: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}
