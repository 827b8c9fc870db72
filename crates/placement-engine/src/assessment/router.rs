use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{AnswerSubmission, GradedAnswer, PublicItem};
use super::service::{PlacementService, PlacementServiceError};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub count: Option<usize>,
}

/// Quiz payload sent to a learner's client. Carries no answer key.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub requested: usize,
    pub delivered: usize,
    pub items: Vec<PublicItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<GradedAnswer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub answers: Vec<AnswerSubmission>,
}

/// Router builder exposing the quiz and scoring endpoints.
pub fn placement_router(service: Arc<PlacementService>) -> Router {
    Router::new()
        .route("/api/v1/placement/quiz", post(quiz_handler))
        .route("/api/v1/placement/score", post(score_handler))
        .route("/api/v1/placement/submit", post(submit_handler))
        .with_state(service)
}

pub(crate) async fn quiz_handler(
    State(service): State<Arc<PlacementService>>,
    axum::Json(request): axum::Json<QuizRequest>,
) -> Response {
    match service.start_quiz(request.count) {
        Ok(sample) => {
            let body = QuizResponse {
                requested: sample.requested(),
                delivered: sample.len(),
                items: sample.public_items(),
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<PlacementService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    match service.score(&request.answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<PlacementService>>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response {
    match service.submit(&request.answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PlacementServiceError) -> Response {
    let status = match error {
        PlacementServiceError::Sampling(_) | PlacementServiceError::Scoring(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
