use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::ErrorResponse;
use thiserror::Error;

pub const NICHE_REQUIRED: &str = "Niche is required";
pub const GENERATION_FAILED: &str = "Failed to generate ideas";

/// Errors surfaced by `POST /api/generate`.
///
/// Provider and parse failures never reach this type; they are absorbed by
/// the generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Niche is required")]
    NicheRequired,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GenerateError::NicheRequired => (StatusCode::BAD_REQUEST, NICHE_REQUIRED),
            GenerateError::Internal(err) => {
                tracing::error!(error = ?err, "Error generating ideas");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
