pub mod health;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::report::handlers;
use crate::state::AppState;

/// The 404 body the assessment frontend expects for unknown paths AND for
/// known paths hit with the wrong method — hence the per-route fallbacks
/// below instead of axum's default 405.
async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/health",
            get(health::health_handler).fallback(route_not_found),
        )
        .route(
            "/api/submit-assessment",
            post(handlers::handle_submit_assessment).fallback(route_not_found),
        )
        .route(
            "/api/download-report/:filename",
            get(handlers::handle_download_report).fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Router tests — full pipeline with stub collaborators, no network
// ────────────────────────────────────────────────────────────────────────────
