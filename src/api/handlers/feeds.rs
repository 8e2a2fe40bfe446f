use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::api::types::{LeaderboardEntry, LeaderboardResponse, SportsResponse};
use crate::api::{state::AppState, ApiError};
use crate::domain::mask_handle;

/// GET /sports
pub async fn sports_overview(State(state): State<AppState>) -> Response {
    match state.feeds.overview().await {
        Ok(data) => Json(SportsResponse {
            success: true,
            data,
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// GET /leaderboard
///
/// Demo-grade board: a single masked entry computed over the anonymous
/// owner's bets. Real multi-user aggregation needs real identities first.
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let rows = state
        .store
        .list("anon")
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let total_units: f64 = rows.iter().map(|bet| bet.units).sum();
    let streak = rows.len().min(5) as u32;

    Ok(Json(LeaderboardResponse {
        leaderboard: vec![LeaderboardEntry {
            nickname: mask_handle(Some("user@example.com")),
            total_units,
            streak,
        }],
    }))
}
