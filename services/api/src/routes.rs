use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use placement_engine::assessment::{placement_router, tier_target, Difficulty, PlacementService};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct BankSummaryResponse {
    pub(crate) total_items: usize,
    pub(crate) quiz_length: usize,
    pub(crate) tiers: Vec<TierCoverage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TierCoverage {
    pub(crate) difficulty: Difficulty,
    pub(crate) items: usize,
    pub(crate) quiz_target: usize,
}

pub(crate) fn with_placement_routes(service: Arc<PlacementService>) -> axum::Router {
    placement_router(service.clone())
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/placement/bank", get(bank_summary_endpoint))
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "since": state.started_at })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn bank_summary_endpoint(
    Extension(service): Extension<Arc<PlacementService>>,
) -> Json<BankSummaryResponse> {
    Json(bank_summary(&service))
}

pub(crate) fn bank_summary(service: &PlacementService) -> BankSummaryResponse {
    let quiz_length = service.quiz_length();
    let tiers = service
        .bank()
        .tier_counts()
        .into_iter()
        .map(|(difficulty, items)| TierCoverage {
            difficulty,
            items,
            quiz_target: tier_target(quiz_length, difficulty),
        })
        .collect();

    BankSummaryResponse {
        total_items: service.bank().len(),
        quiz_length,
        tiers,
    }
}
