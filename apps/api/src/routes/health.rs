use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Always healthy; reports nothing about downstream collaborators.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Career Guide API is running"
    }))
}
