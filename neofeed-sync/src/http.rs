//! HTTP transport for the NeoWs feed.
//!
//! Uses `GET /neo/rest/v1/feed` with the API key as a query parameter.

use crate::config::FeedConfig;
use crate::error::{SyncError, SyncResult};
use crate::transport::FeedTransport;
use async_trait::async_trait;
use neofeed_types::FeedQuery;
use reqwest::Client;
use tracing::{debug, warn};

/// reqwest-backed feed transport.
#[derive(Debug, Clone)]
pub struct HttpFeedTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpFeedTransport {
    /// Creates a transport for the endpoint and key in `config`.
    pub fn new(config: &FeedConfig) -> SyncResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SyncError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.feed_endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    /// The feed endpoint this transport reads from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_params(&self, query: &FeedQuery) -> Vec<(&'static str, String)> {
        let mut params = query.params();
        params.push(("api_key", self.api_key.clone()));
        params
    }
}

#[async_trait]
impl FeedTransport for HttpFeedTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_feed(&self, query: &FeedQuery) -> SyncResult<serde_json::Value> {
        debug!("Requesting feed {} for {}", self.endpoint, query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("feed request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Feed request rejected with {}", status);
            return Err(SyncError::Status {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or_else(|| {
                    format!("feed request failed with status {}", status.as_u16())
                }),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SyncError::Network(format!("failed to read feed body: {e}")))?;

        serde_json::from_slice(&body)
            .map_err(|e| SyncError::Mapping(format!("feed body is not JSON: {e}")))
    }
}

/// Extracts the message from a NeoWs error body.
///
/// The API uses two shapes: `{"error_message": ".."}` for request errors and
/// `{"error": {"message": ".."}}` for key errors from the gateway.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error_message")
        .and_then(|m| m.as_str())
        .or_else(|| value.pointer("/error/message").and_then(|m| m.as_str()))
        .map(str::to_string)
}
