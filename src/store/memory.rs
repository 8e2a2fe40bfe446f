//! Process-local store backend.

use crate::domain::{BetPatch, BetRecord, NewBet};
use crate::error::Result;
use crate::store::BetStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Fallback backend used when no remote KV is configured. Contents are not
/// shared across instances and are lost on restart.
pub struct MemoryStore {
    owners: RwLock<HashMap<String, Vec<BetRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            owners: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BetStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, owner_key: &str) -> Result<Vec<BetRecord>> {
        if owner_key.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .owners
            .read()
            .await
            .get(owner_key)
            .cloned()
            .unwrap_or_default())
    }

    async fn create(&self, owner_key: &str, bet: NewBet) -> Result<BetRecord> {
        let record = BetRecord::create(owner_key, bet);
        let mut owners = self.owners.write().await;
        owners
            .entry(owner_key.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn patch(
        &self,
        owner_key: &str,
        id: &str,
        patch: BetPatch,
    ) -> Result<Option<BetRecord>> {
        let mut owners = self.owners.write().await;
        let Some(rows) = owners.get_mut(owner_key) else {
            return Ok(None);
        };
        let Some(row) = rows.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        row.apply(&patch);
        Ok(Some(row.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BetResult;

    fn bet(event: &str) -> NewBet {
        NewBet {
            event: event.to_string(),
            market: "moneyline".to_string(),
            odds: "+120".to_string(),
            units: 1.0,
            sport_tag: None,
        }
    }

    #[tokio::test]
    async fn list_after_create_includes_record() {
        let store = MemoryStore::new();
        let created = store.create("a", bet("Lakers ML")).await.unwrap();

        let rows = store.list("a").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], created);
    }

    #[tokio::test]
    async fn ids_unique_and_timestamps_non_decreasing() {
        let store = MemoryStore::new();
        let first = store.create("a", bet("one")).await.unwrap();
        let second = store.create("a", bet("two")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn unknown_or_empty_owner_lists_empty() {
        let store = MemoryStore::new();
        assert!(store.list("nobody").await.unwrap().is_empty());
        assert!(store.list("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let store = MemoryStore::new();
        store.create("a", bet("Cowboys -3")).await.unwrap();

        assert!(store.list("b").await.unwrap().is_empty());
        assert_eq!(store.list("a").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn patch_merges_and_preserves_other_fields() {
        let store = MemoryStore::new();
        let created = store.create("a", bet("Yankees ML")).await.unwrap();

        let updated = store
            .patch(
                "a",
                &created.id,
                BetPatch {
                    result: Some(BetResult::Win),
                    clv: None,
                },
            )
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.result, Some(BetResult::Win));
        assert_eq!(updated.event, created.event);
        assert_eq!(updated.units, created.units);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.clv.is_none());
    }

    #[tokio::test]
    async fn patch_missing_id_is_none_and_leaves_collection_unchanged() {
        let store = MemoryStore::new();
        let created = store.create("a", bet("Braves ML")).await.unwrap();

        let missing = store
            .patch("a", "no-such-id", BetPatch::default())
            .await
            .unwrap();
        assert!(missing.is_none());

        let rows = store.list("a").await.unwrap();
        assert_eq!(rows, vec![created]);
    }

    #[tokio::test]
    async fn patch_under_wrong_owner_is_none() {
        let store = MemoryStore::new();
        let created = store.create("a", bet("Chiefs -7")).await.unwrap();

        let crossed = store
            .patch(
                "b",
                &created.id,
                BetPatch {
                    result: Some(BetResult::Loss),
                    clv: None,
                },
            )
            .await
            .unwrap();
        assert!(crossed.is_none());
        assert!(store.list("a").await.unwrap()[0].result.is_none());
    }
}
