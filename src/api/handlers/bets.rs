use axum::extract::{Path, State};
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use crate::api::{state::AppState, ApiError};
use crate::domain::{detect_sport, BetPatch, BetRecord, NewBet};

/// Cookie holding the visitor's pseudo identity. Client-supplied and
/// trusted as-is; this is a demo-grade identity model, not auth.
pub const OWNER_COOKIE: &str = "coach_user_key";

const ANON_OWNER: &str = "anon";

fn owner_key(headers: &HeaderMap) -> String {
    headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                (name.trim() == OWNER_COOKIE).then(|| value.trim().to_string())
            })
        })
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| ANON_OWNER.to_string())
}

/// GET /bets
pub async fn list_bets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BetRecord>>, ApiError> {
    let owner = owner_key(&headers);
    let mut rows = state
        .store
        .list(&owner)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    // Newest first
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(rows))
}

/// POST /bets
pub async fn create_bet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<BetRecord>, ApiError> {
    let owner = owner_key(&headers);
    let bet = parse_new_bet(body).map_err(ApiError::bad_request)?;

    let record = state
        .store
        .create(&owner, bet)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(Json(record))
}

/// PATCH /bets/:id
pub async fn patch_bet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<BetRecord>, ApiError> {
    let owner = owner_key(&headers);
    let patch: BetPatch = serde_json::from_value(body)
        .map_err(|e| ApiError::bad_request(format!("invalid patch: {e}")))?;

    match state.store.patch(&owner, &id, patch).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(ApiError::not_found("Not found")),
        Err(e) => Err(ApiError::bad_request(e.to_string())),
    }
}

/// Boundary validation: required text fields non-empty, units numeric with
/// a 0 default, sport tag inferred from the event when not supplied.
fn parse_new_bet(body: Value) -> Result<NewBet, String> {
    let mut bet: NewBet =
        serde_json::from_value(body).map_err(|e| format!("invalid bet: {e}"))?;

    if bet.event.trim().is_empty() {
        return Err("event must be non-empty".to_string());
    }
    if bet.market.trim().is_empty() {
        return Err("market must be non-empty".to_string());
    }
    if bet.odds.trim().is_empty() {
        return Err("odds must be non-empty".to_string());
    }

    if bet.sport_tag.as_deref().map_or(true, str::is_empty) {
        bet.sport_tag = Some(detect_sport(&bet.event).to_string());
    }
    Ok(bet)
}
