//! JSON API request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::error::NewsError;
use crate::scoring::{ScoringPipeline, Submission, Verdict};

/// Shared application state
pub struct AppState {
    pub pipeline: ScoringPipeline,
}

/// Analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub url: Option<String>,
    pub author: Option<String>,
    /// Image bytes, standard base64
    pub image_base64: Option<String>,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "newscheck-rs",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Score a submission and return the verdict
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<Verdict>, (StatusCode, Json<ApiError>)> {
    let image = match payload.image_base64.as_deref().filter(|s| !s.is_empty()) {
        Some(encoded) => Some(STANDARD.decode(encoded).map_err(|e| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiError::new(&format!("Invalid base64 image: {}", e))),
            )
        })?),
        None => None,
    };

    let submission = Submission {
        text: payload.text,
        url: payload.url.filter(|u| !u.is_empty()),
        author: payload.author.filter(|a| !a.is_empty()),
        image,
    };

    state.pipeline.score(&submission).map(Json).map_err(|e| {
        warn!("Analyze request rejected: {}", e);
        let status = match e {
            NewsError::EmptyText => StatusCode::BAD_REQUEST,
            NewsError::InvalidImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ApiError::new(&e.to_string())))
    })
}
