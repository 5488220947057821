use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::models::{IdeaRequest, VideoIdea};
use crate::startup::AppState;

pub const IDEA_SOURCE_HEADER: &str = "x-idea-source";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub trend: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub ideas: Vec<VideoIdea>,
}

/// `POST /api/generate`
///
/// The body is decoded by hand so that a missing `Content-Type` is accepted
/// and an undecodable body takes the generic 500 path.
#[tracing::instrument(skip(state, body))]
pub async fn generate_ideas(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GenerateError> {
    let payload: GenerateRequest = serde_json::from_slice(&body)
        .map_err(|e| anyhow::anyhow!("Failed to decode request body: {}", e))?;

    let request =
        IdeaRequest::new(payload.niche, payload.trend).ok_or(GenerateError::NicheRequired)?;

    let outcome = state.generator.generate(&request).await;

    tracing::info!(
        source = %outcome.source,
        count = outcome.ideas.len(),
        "Returning ideas"
    );

    Ok((
        [(IDEA_SOURCE_HEADER, outcome.source.as_str())],
        Json(GenerateResponse {
            ideas: outcome.ideas,
        }),
    ))
}
