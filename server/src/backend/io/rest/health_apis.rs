use axum::response::{IntoResponse, Json};

/// Liveness probe
pub async fn health_check() -> impl IntoResponse {
    Json("OK")
}
