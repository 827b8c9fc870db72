use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::{quiz_handler, score_handler};
use crate::assessment::{QuizRequest, ScoreRequest};

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn quiz_route_returns_public_items() {
    let response = router()
        .oneshot(post_json("/api/v1/placement/quiz", json!({})))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["requested"], 20);
    assert_eq!(body["delivered"], 20);
    let items = body["items"].as_array().expect("items array");
    assert_eq!(items.len(), 20);
    assert!(items
        .iter()
        .all(|item| item.get("correct_option_index").is_none()));
}

#[tokio::test]
async fn quiz_route_caps_huge_counts_at_bank_size() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/placement/quiz",
            json!({ "count": 1u64 << 42 }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["requested"], 1u64 << 42);
    assert_eq!(body["delivered"], 36);
    assert_eq!(body["items"].as_array().expect("items array").len(), 36);
}

#[tokio::test]
async fn quiz_handler_rejects_zero_count() {
    let response = quiz_handler(
        State(service()),
        axum::Json(QuizRequest { count: Some(0) }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("positive"));
}

#[tokio::test]
async fn score_handler_rejects_empty_answers() {
    let response = score_handler(
        State(service()),
        axum::Json(ScoreRequest {
            answers: Vec::new(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn score_route_returns_placement() {
    let answers = serde_json::to_value(graded_answers(10, 4)).expect("answers serialize");
    let response = router()
        .oneshot(post_json(
            "/api/v1/placement/score",
            json!({ "answers": answers }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["level"], "A2");
    assert_eq!(body["confidence"], "medium");
    assert_eq!(body["correct_count"], 4);
    assert_eq!(body["total_questions"], 10);
}

#[tokio::test]
async fn submit_route_grades_raw_selections() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/placement/submit",
            json!({
                "answers": [
                    { "question_id": "a1-01", "selected_option_index": 0 },
                    { "question_id": "a1-02", "selected_option_index": 0 },
                    { "question_id": "b1-03", "selected_option_index": 0 },
                    { "question_id": "c2-06", "selected_option_index": 1 },
                    { "question_id": "unknown", "selected_option_index": 0 }
                ]
            }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["correct_count"], 3);
    assert_eq!(body["total_questions"], 5);
    assert_eq!(body["unresolved"], 1);
    assert_eq!(body["level"], "B1");
    assert_eq!(body["confidence"], "high");
}
