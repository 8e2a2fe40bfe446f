use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Bet tracker
        .route("/bets", get(handlers::list_bets).post(handlers::create_bet))
        .route("/bets/:id", patch(handlers::patch_bet))
        // Completion-backed endpoints
        .route("/nlp", post(handlers::parse_bet_text))
        .route("/coach", post(handlers::coach_chat))
        .route("/strategy", post(handlers::strategy_plan))
        .route("/checklist", post(handlers::prebet_checklist))
        .route("/notes", post(handlers::session_notes))
        // Info endpoints
        .route("/sports", get(handlers::sports_overview))
        .route("/leaderboard", get(handlers::leaderboard))
        // Sharing
        .route("/share-discord", post(handlers::share_discord))
        // Health
        .route("/healthz", get(handlers::healthz))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
