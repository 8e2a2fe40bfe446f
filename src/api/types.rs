use crate::feeds::SportOverview;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Extraction Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NlpResponse {
    /// Bet-shaped partial; may be empty when the model reply was unusable
    pub parsed: Value,
}

// ============================================================================
// Coach Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachBody {
    pub message: String,
    #[serde(default)]
    pub persona: Option<String>,
    #[serde(default)]
    pub risk_tag: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub reply: String,
    /// null when the reply carried no parseable RECEIPTS block
    pub receipts: Option<Value>,
    /// null when the reply carried no parseable SUGGESTED_BET block
    pub suggested_bet: Option<Value>,
}

// ============================================================================
// Guide Types
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyBody {
    #[serde(default)]
    pub goal: Option<Value>,
    #[serde(default)]
    pub bankroll: Option<Value>,
    #[serde(default)]
    pub horizon_weeks: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyResponse {
    pub plan: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistBody {
    #[serde(default)]
    pub sport_or_market: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistResponse {
    pub checklist: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesBody {
    #[serde(default)]
    pub last_messages: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotesResponse {
    pub notes: String,
}

// ============================================================================
// Info Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SportsResponse {
    pub success: bool,
    pub data: Vec<SportOverview>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub nickname: String,
    pub total_units: f64,
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

// ============================================================================
// Share Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ShareResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Health Check Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub uptime_secs: i64,
}

/// Render an optional scalar the way a template would: strings verbatim,
/// numbers via display, anything else empty.
pub fn scalar_text(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
