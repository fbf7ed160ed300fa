use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::analyze::CopyScorer;
use crate::metrics::{record_rejected, record_scored};
use crate::model::{ScoreInput, ScoreResult, CAPTION_COUNT};
use crate::variants::{generate_variants, CopyVariant};

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<CopyScorer>,
}

impl AppState {
    pub fn new(scorer: CopyScorer) -> Self {
        Self {
            scorer: Arc::new(scorer),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CopyScorer::default())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/score", post(score))
        .route("/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/* ----------------------------
Errors
---------------------------- */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    CaptionCount(usize),
    BlankAppName,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::CaptionCount(n) => {
                write!(f, "expected exactly {CAPTION_COUNT} captions, got {n}")
            }
            ApiError::BlankAppName => f.write_str("appName must not be empty"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Contract checks the engine itself does not perform.
pub fn validate(input: &ScoreInput) -> Result<(), ApiError> {
    if input.app_name.trim().is_empty() {
        return Err(ApiError::BlankAppName);
    }
    if input.captions.len() != CAPTION_COUNT {
        return Err(ApiError::CaptionCount(input.captions.len()));
    }
    Ok(())
}

fn validated(endpoint: &'static str, input: &ScoreInput) -> Result<(), ApiError> {
    validate(input).inspect_err(|e| {
        record_rejected(endpoint);
        debug!(endpoint, error = %e, "rejected scoring request");
    })
}

/* ----------------------------
Handlers
---------------------------- */

async fn score(
    State(state): State<AppState>,
    Json(input): Json<ScoreInput>,
) -> Result<Json<ScoreResult>, ApiError> {
    validated("score", &input)?;
    let result = state.scorer.score(&input);
    record_scored("score", result.score);
    Ok(Json(result))
}

#[derive(Debug, Serialize)]
pub struct GenerateResp {
    pub variants: Vec<CopyVariant>,
    #[serde(flatten)]
    pub result: ScoreResult,
}

async fn generate(
    State(state): State<AppState>,
    Json(input): Json<ScoreInput>,
) -> Result<Json<GenerateResp>, ApiError> {
    validated("generate", &input)?;
    let result = state.scorer.score(&input);
    record_scored("generate", result.score);
    Ok(Json(GenerateResp {
        variants: generate_variants(&input),
        result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rules() {
        let ok = ScoreInput::new("App", "Games", ["c"; 6]);
        assert_eq!(validate(&ok), Ok(()));

        let short = ScoreInput::new("App", "Games", ["c"; 5]);
        assert_eq!(validate(&short), Err(ApiError::CaptionCount(5)));

        let blank = ScoreInput::new("  ", "Games", ["c"; 6]);
        assert_eq!(validate(&blank), Err(ApiError::BlankAppName));
    }

    #[test]
    fn error_message_names_expected_count() {
        assert_eq!(
            ApiError::CaptionCount(7).to_string(),
            "expected exactly 6 captions, got 7"
        );
    }
}
