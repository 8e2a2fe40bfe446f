//! Third-party sports data: team directories and betting odds, merged into
//! one overview per sport.

pub mod odds;
pub mod sportsdata;

pub use odds::{odds_sport_key, OddsClient, OddsConfig};
pub use sportsdata::{SportsDataClient, SportsDataConfig};

use crate::error::Result;
use futures::future::try_join_all;
use serde::Serialize;
use serde_json::Value;

/// Sport codes covered by the aggregation endpoint
pub const SPORTS: &[&str] = &["nfl", "nba", "mlb", "nhl", "cfb", "cbb"];

/// One merged overview entry: team directory plus current odds
#[derive(Debug, Clone, Serialize)]
pub struct SportOverview {
    pub sport: String,
    pub teams: Value,
    pub odds: Value,
}

/// Both feed clients behind one fan-out
pub struct SportsFeeds {
    teams: SportsDataClient,
    odds: OddsClient,
}

impl SportsFeeds {
    pub fn new(teams: SportsDataConfig, odds: OddsConfig) -> Result<Self> {
        Ok(Self {
            teams: SportsDataClient::new(teams)?,
            odds: OddsClient::new(odds)?,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(SportsDataConfig::from_env(), OddsConfig::from_env())
    }

    /// Fan out one teams call and one odds call per sport concurrently,
    /// then merge by sport code. Any single feed failure fails the whole
    /// aggregation; there are no retries.
    pub async fn overview(&self) -> Result<Vec<SportOverview>> {
        let teams = try_join_all(SPORTS.iter().copied().map(|sport| self.teams.teams(sport)));
        let odds = try_join_all(SPORTS.iter().copied().map(|sport| self.odds.current_odds(sport)));
        let (teams, odds) = futures::try_join!(teams, odds)?;

        Ok(SPORTS
            .iter()
            .zip(teams.into_iter().zip(odds))
            .map(|(sport, (teams, odds))| SportOverview {
                sport: sport.to_string(),
                teams,
                odds,
            })
            .collect())
    }
}
