//! Bet persistence: a remote key-value backend with an in-memory fallback.

pub mod kv;
pub mod memory;

pub use kv::{KvConfig, RemoteKvStore};
pub use memory::MemoryStore;

use crate::domain::{BetPatch, BetRecord, NewBet};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Persistence contract for per-owner bet collections.
///
/// Both backends must be observably identical for list/create/patch. The
/// remote backend persists an owner's whole collection as one JSON blob, so
/// the collection is the unit of consistency; there is no partial-record
/// remote update.
#[async_trait]
pub trait BetStore: Send + Sync {
    /// Short backend name for diagnostics ("memory" or "kv")
    fn backend(&self) -> &'static str;

    /// All records for the owner, unordered (callers sort). Empty for an
    /// unknown or empty owner key; never fails for a missing key.
    async fn list(&self, owner_key: &str) -> Result<Vec<BetRecord>>;

    /// Assign id and timestamp, append to the owner's collection, and return
    /// the stored record.
    async fn create(&self, owner_key: &str, bet: NewBet) -> Result<BetRecord>;

    /// Merge `result`/`clv` into the record with this id. `None` when the
    /// owner has no record with that id.
    async fn patch(&self, owner_key: &str, id: &str, patch: BetPatch)
        -> Result<Option<BetRecord>>;
}

/// Pick the backend once at process start: remote KV when both its URL and
/// token are configured, otherwise a process-local map lost on restart.
pub fn select_store(config: KvConfig) -> Result<Arc<dyn BetStore>> {
    if config.is_configured() {
        info!(url = %config.rest_url, "bet store: remote KV");
        Ok(Arc::new(RemoteKvStore::new(config)?))
    } else {
        info!("bet store: in-memory (KV env absent, data is ephemeral)");
        Ok(Arc::new(MemoryStore::new()))
    }
}
