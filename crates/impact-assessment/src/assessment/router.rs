use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::answers::AnswerSheet;
use super::domain::Answer;
use super::evaluation::EvaluationEngine;

/// Body of an evaluation request: the respondent's full answer map.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, Answer>,
}

/// Stateless endpoints: the caller sends its answers, the service returns the evaluation.
pub fn assessment_router(engine: Arc<EvaluationEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_handler))
        .route("/api/v1/assessment/evaluations", post(evaluation_handler))
        .with_state(engine)
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<EvaluationEngine>>) -> Response {
    let catalog = engine.catalog();
    let payload = json!({
        "question_count": catalog.len(),
        "max_score": catalog.max_score(),
        "dimensions": catalog.outline(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn evaluation_handler(
    State(engine): State<Arc<EvaluationEngine>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response {
    match AnswerSheet::validated(engine.catalog(), request.answers) {
        Ok(sheet) => {
            let evaluation = engine.evaluate(&sheet);
            debug!(
                answered = sheet.len(),
                total = evaluation.score.total,
                "evaluation served"
            );
            (StatusCode::OK, axum::Json(evaluation)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
