use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::error;

use crate::agent::extract_bet;
use crate::api::{state::AppState, types::NlpResponse, ApiError};

/// POST /nlp
pub async fn parse_bet_text(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<NlpResponse>, ApiError> {
    let Some(text) = body
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
    else {
        return Err(ApiError::bad_request("Missing text"));
    };

    if !state.completion.is_configured() {
        error!("completion API key missing");
        return Err(ApiError::internal(
            "Server misconfiguration: missing API key",
        ));
    }

    let parsed = extract_bet(&state.completion, text)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(NlpResponse { parsed }))
}
