//! Remote key-value store backend (Upstash-style REST API).
//!
//! The owner's whole collection lives under one key as a JSON array string.
//! Create and patch are a read-modify-write on that blob with no versioning,
//! so two concurrent writers for the same owner race and the last write wins.

use crate::domain::{BetPatch, BetRecord, NewBet};
use crate::error::{CoachError, Result};
use crate::store::BetStore;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

const KEY_PREFIX: &str = "coach:bets:";

/// Remote KV configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// REST endpoint base URL
    pub rest_url: String,
    /// Bearer token
    pub token: String,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            rest_url: String::new(),
            token: String::new(),
            timeout_secs: 10,
        }
    }
}

impl KvConfig {
    pub fn from_env() -> Self {
        Self {
            rest_url: std::env::var("KV_REST_API_URL").unwrap_or_default(),
            token: std::env::var("KV_REST_API_TOKEN").unwrap_or_default(),
            timeout_secs: 10,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.rest_url.is_empty() && !self.token.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct GetReply {
    result: Option<String>,
}

#[derive(Debug, Serialize)]
struct SetBody {
    value: String,
}

/// Remote KV store client
pub struct RemoteKvStore {
    config: KvConfig,
    http: Client,
}

impl RemoteKvStore {
    pub fn new(config: KvConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoachError::Internal(format!("failed to build KV HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    fn key_for(owner_key: &str) -> String {
        format!("{KEY_PREFIX}{owner_key}")
    }

    fn url_for(&self, op: &str, owner_key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.rest_url.trim_end_matches('/'),
            op,
            urlencoding::encode(&Self::key_for(owner_key))
        )
    }

    /// Fetch the owner's blob. A missing key, an unreachable KV, or an
    /// undecodable blob all degrade to an empty collection; only writes
    /// surface store failures.
    async fn read_rows(&self, owner_key: &str) -> Vec<BetRecord> {
        let url = self.url_for("get", owner_key);
        let reply = match self
            .http
            .get(&url)
            .bearer_auth(&self.config.token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(resp) => match resp.json::<GetReply>().await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(owner = %owner_key, error = %e, "KV get reply decode failed");
                    return Vec::new();
                }
            },
            Err(e) => {
                warn!(owner = %owner_key, error = %e, "KV get failed, treating as empty");
                return Vec::new();
            }
        };

        match reply.result {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(owner = %owner_key, error = %e, "KV blob is not a bet list");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    async fn write_rows(&self, owner_key: &str, rows: &[BetRecord]) -> Result<()> {
        let url = self.url_for("set", owner_key);
        let body = SetBody {
            value: serde_json::to_string(rows)?,
        };
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(CoachError::Store(format!("KV set failed: {status}: {text}")));
        }
        Ok(())
    }
}

#[async_trait]
impl BetStore for RemoteKvStore {
    fn backend(&self) -> &'static str {
        "kv"
    }

    async fn list(&self, owner_key: &str) -> Result<Vec<BetRecord>> {
        if owner_key.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.read_rows(owner_key).await)
    }

    async fn create(&self, owner_key: &str, bet: NewBet) -> Result<BetRecord> {
        let record = BetRecord::create(owner_key, bet);
        let mut rows = self.read_rows(owner_key).await;
        rows.push(record.clone());
        self.write_rows(owner_key, &rows).await?;
        Ok(record)
    }

    async fn patch(
        &self,
        owner_key: &str,
        id: &str,
        patch: BetPatch,
    ) -> Result<Option<BetRecord>> {
        let mut rows = self.read_rows(owner_key).await;
        let Some(row) = rows.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        row.apply(&patch);
        let updated = row.clone();
        self.write_rows(owner_key, &rows).await?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_and_url_encoded() {
        let store = RemoteKvStore::new(KvConfig {
            rest_url: "https://kv.example.com/".to_string(),
            token: "t".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        assert_eq!(RemoteKvStore::key_for("anon"), "coach:bets:anon");
        assert_eq!(
            store.url_for("get", "anon"),
            "https://kv.example.com/get/coach%3Abets%3Aanon"
        );
    }

    #[test]
    fn config_requires_both_url_and_token() {
        assert!(!KvConfig::default().is_configured());
        assert!(!KvConfig {
            rest_url: "https://kv.example.com".to_string(),
            ..KvConfig::default()
        }
        .is_configured());
        assert!(KvConfig {
            rest_url: "https://kv.example.com".to_string(),
            token: "t".to_string(),
            timeout_secs: 10,
        }
        .is_configured());
    }

    #[test]
    fn get_reply_decodes_missing_and_present_results() {
        let missing: GetReply = serde_json::from_str(r#"{"result":null}"#).unwrap();
        assert!(missing.result.is_none());

        let present: GetReply = serde_json::from_str(r#"{"result":"[]"}"#).unwrap();
        assert_eq!(present.result.as_deref(), Some("[]"));
    }
}
