use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /health - Liveness probe
/// The relay is stateless per request; alive means ready.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
