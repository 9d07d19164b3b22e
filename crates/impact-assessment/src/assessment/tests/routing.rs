use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::collections::BTreeMap;
use tower::ServiceExt;

use crate::assessment::domain::Answer;
use crate::assessment::router::{assessment_router, evaluation_handler, EvaluationRequest};

#[tokio::test]
async fn catalog_route_lists_numbered_questions_by_dimension() {
    let response = assessment_router(engine())
        .oneshot(
            axum::http::Request::get("/api/v1/assessment/catalog")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["question_count"], json!(61));
    assert_eq!(payload["dimensions"].as_array().map(Vec::len), Some(10));
    assert_eq!(payload["dimensions"][0]["dimension"], json!("general"));
    assert_eq!(payload["dimensions"][0]["questions"][0]["number"], json!("1.1"));
    assert_eq!(payload["dimensions"][0]["questions"][0]["id"], json!("q1"));
}

#[tokio::test]
async fn evaluation_route_scores_posted_answers() {
    let body = json!({
        "answers": {
            "q7": false,
            "q8": false,
            "q13": true,
            "q50": null,
        }
    });

    let response = assessment_router(engine())
        .oneshot(
            axum::http::Request::post("/api/v1/assessment/evaluations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"]["total"], json!(18.32));
    assert_eq!(payload["score"]["impact_level"], json!("low"));
    assert_eq!(payload["progress"]["answered"], json!(4));
    assert_eq!(
        payload["recommendations"][0]["stage"],
        json!("conceptualization_and_design")
    );
    assert_eq!(payload["general_info"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn evaluation_handler_rejects_answers_that_do_not_fit() {
    let mut answers = BTreeMap::new();
    answers.insert("q5".to_string(), Answer::NotApplicable);

    let response = evaluation_handler(State(engine()), axum::Json(EvaluationRequest { answers })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("q5")));
}

#[tokio::test]
async fn evaluation_handler_rejects_unknown_questions() {
    let mut answers = BTreeMap::new();
    answers.insert("q999".to_string(), yes());

    let response = evaluation_handler(State(engine()), axum::Json(EvaluationRequest { answers })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_body_evaluates_to_the_floor() {
    let response = assessment_router(engine())
        .oneshot(
            axum::http::Request::post("/api/v1/assessment/evaluations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"]["total"], json!(18.32));
    assert_eq!(payload["progress"]["completion_pct"], json!(0.0));
    assert_eq!(payload["recommendations"], json!([]));
}
