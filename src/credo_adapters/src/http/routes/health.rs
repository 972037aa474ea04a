use axum::{Json, response::IntoResponse};
use serde_json::json;

/// GET /health - liveness only, no dependency checks.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
