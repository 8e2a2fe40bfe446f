use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::types::ShareResponse;
use crate::api::state::AppState;

/// POST /share-discord
///
/// Degrades to `{ok:false}` when no webhook is configured instead of
/// failing; a configured-but-failing webhook is a 400.
pub async fn share_discord(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ShareResponse>, (StatusCode, Json<ShareResponse>)> {
    let text = body.get("text").and_then(Value::as_str).unwrap_or_default();

    let Some(notifier) = &state.discord else {
        return Ok(Json(ShareResponse {
            ok: false,
            message: Some("No webhook set".to_string()),
            error: None,
        }));
    };

    match notifier.share(text).await {
        Ok(()) => Ok(Json(ShareResponse {
            ok: true,
            message: None,
            error: None,
        })),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ShareResponse {
                ok: false,
                message: None,
                error: Some(e),
            }),
        )),
    }
}
