use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::types::HealthResponse;

/// GET /healthz
pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store: state.store.backend().to_string(),
        uptime_secs: state.uptime_seconds(),
    })
}
