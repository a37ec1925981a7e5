//! Service configuration.

use crate::error::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the feed service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL of the NeoWs API (e.g. `https://api.nasa.gov`).
    pub api_base_url: String,
    /// API key sent as the `api_key` query parameter.
    pub api_key: String,
    /// Artificial delay added to every feed read (ms).
    pub fetch_delay_ms: u64,
    /// Simulated round trip for an update confirmation (ms).
    pub update_delay_ms: u64,
    /// HTTP request timeout (seconds).
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.nasa.gov".to_string(),
            api_key: "DEMO_KEY".to_string(),
            fetch_delay_ms: 1500,
            update_delay_ms: 1500,
            request_timeout_secs: 30,
        }
    }
}

impl FeedConfig {
    /// Loads a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> SyncResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SyncError::Config(format!("failed to read {}: {e}", path.display())))?;
        let config: FeedConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can be used to build a transport.
    pub fn validate(&self) -> SyncResult<()> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(SyncError::Config("api_base_url must not be empty".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(SyncError::Config(format!(
                "api_base_url must be an http(s) URL, got {base}"
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(SyncError::Config("api_key must not be empty".into()));
        }
        Ok(())
    }

    /// Full URL of the feed endpoint.
    pub fn feed_endpoint(&self) -> String {
        format!("{}/neo/rest/v1/feed", self.api_base_url.trim_end_matches('/'))
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn update_delay(&self) -> Duration {
        Duration::from_millis(self.update_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns a copy with both artificial delays removed.
    #[must_use]
    pub fn without_delays(mut self) -> Self {
        self.fetch_delay_ms = 0;
        self.update_delay_ms = 0;
        self
    }
}
