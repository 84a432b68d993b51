use axum::{response::Json, http::StatusCode};
use crate::models::HealthResponse;

// GET /health - Liveness only, never touches the database
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
    };

    (StatusCode::OK, Json(response))
}
