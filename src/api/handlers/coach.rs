use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::agent::{ask_coach, guides, DEFAULT_PERSONA, DEFAULT_RISK_TAG};
use crate::api::types::{
    scalar_text, ChecklistBody, ChecklistResponse, CoachBody, CoachResponse, NotesBody,
    NotesResponse, StrategyBody, StrategyResponse,
};
use crate::api::{state::AppState, ApiError};

/// POST /coach
pub async fn coach_chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CoachResponse>, ApiError> {
    let body: CoachBody =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let persona = body.persona.as_deref().unwrap_or(DEFAULT_PERSONA);
    let risk_tag = body.risk_tag.as_deref().unwrap_or(DEFAULT_RISK_TAG);

    let coached = ask_coach(&state.completion, &body.message, persona, risk_tag)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(CoachResponse {
        reply: coached.reply,
        receipts: coached.receipts,
        suggested_bet: coached.suggested_bet,
    }))
}

/// POST /strategy
pub async fn strategy_plan(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<StrategyResponse>, ApiError> {
    let body: StrategyBody =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let plan = guides::build_plan(
        &state.completion,
        &scalar_text(&body.goal),
        &scalar_text(&body.bankroll),
        &scalar_text(&body.horizon_weeks),
    )
    .await
    .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(StrategyResponse { plan }))
}

/// POST /checklist
pub async fn prebet_checklist(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChecklistResponse>, ApiError> {
    let body: ChecklistBody =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let checklist = guides::build_checklist(
        &state.completion,
        body.sport_or_market.as_deref().unwrap_or_default(),
    )
    .await
    .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(ChecklistResponse { checklist }))
}

/// POST /notes
pub async fn session_notes(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<NotesResponse>, ApiError> {
    let body: NotesBody =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let last_messages = body.last_messages.unwrap_or_else(|| Value::Array(Vec::new()));
    let notes = guides::summarize_session(&state.completion, &last_messages)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(NotesResponse { notes }))
}
