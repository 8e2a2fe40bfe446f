use crate::adapters::DiscordNotifier;
use crate::agent::CompletionClient;
use crate::feeds::SportsFeeds;
use crate::store::BetStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Bet persistence backend, selected once at startup
    pub store: Arc<dyn BetStore>,

    /// Chat-completion client (coach, extractor, guides)
    pub completion: Arc<CompletionClient>,

    /// Sports/odds aggregation clients
    pub feeds: Arc<SportsFeeds>,

    /// Discord webhook, when configured
    pub discord: Option<Arc<DiscordNotifier>>,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BetStore>,
        completion: Arc<CompletionClient>,
        feeds: Arc<SportsFeeds>,
        discord: Option<Arc<DiscordNotifier>>,
    ) -> Self {
        Self {
            store,
            completion,
            feeds,
            discord,
            start_time: Utc::now(),
        }
    }

    /// Get service uptime in seconds
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
