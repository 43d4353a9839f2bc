use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_status_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root).fallback(route_not_found))
        .route("/health", get(health).fallback(route_not_found))
}

/// Plain-text status line
async fn root() -> &'static str {
    "Cars API"
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "car-inventory",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unknown routes
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
