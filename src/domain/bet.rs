//! Bet record types shared by the store and the HTTP surface.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settled outcome of a tracked bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetResult {
    Win,
    Loss,
    Push,
}

/// One tracked wager, as stored and as served over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    /// Unique within the owner's collection, assigned at creation
    pub id: String,
    /// Client-supplied visitor key; not an authenticated identity
    pub owner_key: String,
    pub event: String,
    pub market: String,
    pub odds: String,
    #[serde(default)]
    pub units: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_tag: Option<String>,
    /// Set only via patch once the bet settles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<BetResult>,
    /// Closing-line-value annotation, set only via patch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clv: Option<f64>,
    /// Epoch milliseconds; immutable, newest-first sort key
    pub created_at: i64,
}

/// Creation fields for a bet (identity and timestamp are assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBet {
    pub event: String,
    pub market: String,
    pub odds: String,
    #[serde(default)]
    pub units: f64,
    #[serde(default)]
    pub sport_tag: Option<String>,
}

/// Settlement patch; only these two fields are mutable after creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetPatch {
    #[serde(default)]
    pub result: Option<BetResult>,
    #[serde(default)]
    pub clv: Option<f64>,
}

impl BetRecord {
    /// Assemble a full record from creation fields. Both store backends use
    /// this so id/timestamp assignment stays identical across them.
    pub fn create(owner_key: &str, bet: NewBet) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_key: owner_key.to_string(),
            event: bet.event,
            market: bet.market,
            odds: bet.odds,
            units: bet.units,
            sport_tag: bet.sport_tag,
            result: None,
            clv: None,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Merge a settlement patch. Fields absent from the patch are left
    /// untouched.
    pub fn apply(&mut self, patch: &BetPatch) {
        if let Some(result) = patch.result {
            self.result = Some(result);
        }
        if let Some(clv) = patch.clv {
            self.clv = Some(clv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_bet() -> NewBet {
        NewBet {
            event: "Ravens @ Chiefs".to_string(),
            market: "spread".to_string(),
            odds: "-110".to_string(),
            units: 1.5,
            sport_tag: Some("NFL".to_string()),
        }
    }

    #[test]
    fn create_assigns_identity_and_timestamp() {
        let a = BetRecord::create("anon", sample_bet());
        let b = BetRecord::create("anon", sample_bet());

        assert_ne!(a.id, b.id);
        assert!(b.created_at >= a.created_at);
        assert_eq!(a.owner_key, "anon");
        assert!(a.result.is_none());
        assert!(a.clv.is_none());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut record = BetRecord::create("anon", sample_bet());
        record.clv = Some(2.0);

        record.apply(&BetPatch {
            result: Some(BetResult::Win),
            clv: None,
        });

        assert_eq!(record.result, Some(BetResult::Win));
        assert_eq!(record.clv, Some(2.0));
        assert_eq!(record.units, 1.5);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let record = BetRecord::create("anon", sample_bet());
        let value = serde_json::to_value(&record).unwrap();

        assert!(value.get("ownerKey").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("sportTag").is_some());
        // unset optionals are omitted, not null
        assert!(value.get("result").is_none());
        assert!(value.get("clv").is_none());
    }

    #[test]
    fn patch_deserializes_result_values() {
        let patch: BetPatch = serde_json::from_value(json!({"result": "push"})).unwrap();
        assert_eq!(patch.result, Some(BetResult::Push));
        assert!(patch.clv.is_none());

        assert!(serde_json::from_value::<BetPatch>(json!({"result": "draw"})).is_err());
    }
}
