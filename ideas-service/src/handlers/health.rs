use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "ideas-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check. Nothing to probe: providers are optional and checked per request.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
