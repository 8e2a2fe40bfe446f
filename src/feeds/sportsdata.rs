//! SportsDataIO team-directory client.

use crate::error::{CoachError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const DEFAULT_SPORTSDATA_BASE: &str = "https://api.sportsdata.io/v3";

/// SportsDataIO client configuration
#[derive(Debug, Clone)]
pub struct SportsDataConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for SportsDataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SPORTSDATA_BASE.to_string(),
            api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

impl SportsDataConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SPORTSDATAIO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SPORTSDATA_BASE.to_string()),
            api_key: std::env::var("SPORTSDATAIO_API_KEY").unwrap_or_default(),
            timeout_secs: 15,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// SportsDataIO client
pub struct SportsDataClient {
    config: SportsDataConfig,
    http: Client,
}

impl SportsDataClient {
    pub fn new(config: SportsDataConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                CoachError::Internal(format!("failed to build SportsDataIO client: {e}"))
            })?;

        Ok(Self { config, http })
    }

    /// Team directory for one sport code (e.g. "nfl")
    pub async fn teams(&self, sport: &str) -> Result<Value> {
        if !self.config.is_configured() {
            return Err(CoachError::Upstream(
                "SportsDataIO API key not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/{}/scores/json/Teams",
            self.config.base_url.trim_end_matches('/'),
            sport
        );
        debug!(%sport, "fetching team directory");

        let resp = self
            .http
            .get(&url)
            .header("Ocp-Apim-Subscription-Key", &self.config.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CoachError::Upstream(format!(
                "SportsDataIO error for {sport}: {}",
                resp.status()
            )));
        }

        Ok(resp.json().await?)
    }
}
