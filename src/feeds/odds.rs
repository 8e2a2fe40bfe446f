//! The Odds API client for current betting lines.

use crate::error::{CoachError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const DEFAULT_ODDS_API_BASE: &str = "https://api.the-odds-api.com/v4";

/// Map an overview sport code to The Odds API sport key. Unknown codes pass
/// through unchanged.
pub fn odds_sport_key(sport: &str) -> &str {
    match sport {
        "nfl" => "americanfootball_nfl",
        "nba" => "basketball_nba",
        "mlb" => "baseball_mlb",
        "nhl" => "icehockey_nhl",
        "cfb" => "americanfootball_ncaaf",
        "cbb" => "basketball_ncaab",
        _ => sport,
    }
}

/// The Odds API client configuration
#[derive(Debug, Clone)]
pub struct OddsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ODDS_API_BASE.to_string(),
            api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

impl OddsConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ODDS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ODDS_API_BASE.to_string()),
            api_key: std::env::var("ODDS_API_KEY").unwrap_or_default(),
            timeout_secs: 15,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// The Odds API client
pub struct OddsClient {
    config: OddsConfig,
    http: Client,
}

impl OddsClient {
    pub fn new(config: OddsConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoachError::Internal(format!("failed to build odds client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Current US moneyline/spread/total odds for one sport code
    pub async fn current_odds(&self, sport: &str) -> Result<Value> {
        if !self.config.is_configured() {
            return Err(CoachError::Upstream(
                "Odds API key not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/sports/{}/odds/",
            self.config.base_url.trim_end_matches('/'),
            odds_sport_key(sport)
        );
        debug!(%sport, "fetching odds");

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("regions", "us"),
                ("markets", "h2h,spreads,totals"),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CoachError::Upstream(format!(
                "The Odds API error for {sport}: {}",
                resp.status()
            )));
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_overview_codes_to_api_keys() {
        assert_eq!(odds_sport_key("nfl"), "americanfootball_nfl");
        assert_eq!(odds_sport_key("nba"), "basketball_nba");
        assert_eq!(odds_sport_key("mlb"), "baseball_mlb");
        assert_eq!(odds_sport_key("nhl"), "icehockey_nhl");
        assert_eq!(odds_sport_key("cfb"), "americanfootball_ncaaf");
        assert_eq!(odds_sport_key("cbb"), "basketball_ncaab");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(odds_sport_key("soccer_epl"), "soccer_epl");
    }
}
