use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::AnswerSheet;
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{
    Answer, ChoiceOption, Dimension, InputKind, Question, ScoreRule, Stage,
};
use crate::assessment::evaluation::EvaluationEngine;
use crate::assessment::recommendations::{Candidate, Condition, RecommendationRule, RuleTable};
use crate::assessment::scoring::ScoringConfig;
use crate::assessment::store::{AnswerSlotStore, PersistedAnswers, SlotKey, StoreError};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn engine() -> Arc<EvaluationEngine> {
    Arc::new(EvaluationEngine::standard())
}

fn question(id: &'static str, kind: InputKind, scoring: ScoreRule) -> Question {
    Question {
        id,
        text: "Pregunta de prueba",
        kind,
        dimension: Dimension::Regulatory,
        stage: Stage::ConceptualizationAndDesign,
        help: None,
        options: Vec::new(),
        contributes: true,
        scoring,
    }
}

fn option(value: &'static str, score: Option<f64>) -> ChoiceOption {
    ChoiceOption {
        value,
        label: value,
        score,
    }
}

/// Small catalog and rule table carrying one of each static-data defect.
/// Only q1 (first definition), q4 and q5 score.
pub(super) fn defective_engine() -> EvaluationEngine {
    let questions = vec![
        question("q1", InputKind::YesNo, ScoreRule::WhenYes(4.0)),
        question("q1", InputKind::YesNo, ScoreRule::WhenYes(9.0)),
        question("q2", InputKind::YesNo, ScoreRule::Unscored),
        Question {
            options: vec![option("a", None), option("b", None)],
            ..question("q3", InputKind::Select, ScoreRule::PerOption)
        },
        Question {
            options: vec![option("a", None)],
            ..question("q4", InputKind::YesNo, ScoreRule::WhenNo(2.5))
        },
        Question {
            options: vec![option("a", Some(1.5)), option("b", Some(3.0))],
            ..question("q5", InputKind::Select, ScoreRule::PerOption)
        },
    ];
    let rules = vec![
        RecommendationRule {
            question_id: "q1",
            candidates: vec![Candidate {
                text: "Revise la base legal del tratamiento.",
                condition: Condition::IsTrue,
                resource: None,
            }],
        },
        RecommendationRule {
            question_id: "q404",
            candidates: vec![Candidate {
                text: "Regla sin pregunta.",
                condition: Condition::IsTrue,
                resource: None,
            }],
        },
    ];

    EvaluationEngine::new(
        Arc::new(QuestionCatalog::new(questions)),
        Arc::new(RuleTable::new(rules)),
        ScoringConfig::default(),
    )
}

pub(super) fn sheet(engine: &EvaluationEngine, entries: &[(&str, Answer)]) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for (question_id, answer) in entries {
        sheet
            .record(engine.catalog(), question_id, answer.clone())
            .expect("fixture answer fits the catalog");
    }
    sheet
}

pub(super) fn yes() -> Answer {
    Answer::Bool(true)
}

pub(super) fn no() -> Answer {
    Answer::Bool(false)
}

pub(super) fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}

/// Any answer that fits the question's input kind.
pub(super) fn sample_answer(question: &Question) -> Answer {
    match question.kind {
        InputKind::Text | InputKind::LongText => text("respuesta"),
        InputKind::Select => text(question.options[0].value),
        InputKind::MultiSelect => Answer::MultiText(vec![question.options[0].value.to_string()]),
        InputKind::YesNo => yes(),
        InputKind::YesNoNotApplicable => Answer::NotApplicable,
    }
}

/// The answer that earns each scored question its largest contribution.
pub(super) fn worst_case_sheet(catalog: &QuestionCatalog) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for question in catalog.questions().iter().filter(|q| q.contributes) {
        let answer = match question.scoring {
            ScoreRule::WhenYes(_) | ScoreRule::EitherWay(_) => yes(),
            ScoreRule::WhenNo(_) => no(),
            ScoreRule::PerOption => {
                let best = question
                    .options
                    .iter()
                    .max_by(|a, b| {
                        a.score
                            .unwrap_or(0.0)
                            .total_cmp(&b.score.unwrap_or(0.0))
                    })
                    .expect("scored select has options");
                text(best.value)
            }
            ScoreRule::Unscored => continue,
        };
        sheet
            .record(catalog, question.id, answer)
            .expect("worst case answer fits");
    }
    sheet
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Store whose every operation fails, standing in for unavailable storage.
#[derive(Default)]
pub(super) struct UnavailableStore;

impl AnswerSlotStore for UnavailableStore {
    fn load(&self, _key: &SlotKey) -> Result<Option<PersistedAnswers>, StoreError> {
        Err(StoreError::Unavailable("storage offline".to_string()))
    }

    fn save(&self, _key: &SlotKey, _document: &PersistedAnswers) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &SlotKey) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage offline".to_string()))
    }
}

/// Store that has nothing saved and refuses every write.
pub(super) struct ReadOnlyStore;

impl AnswerSlotStore for ReadOnlyStore {
    fn load(&self, _key: &SlotKey) -> Result<Option<PersistedAnswers>, StoreError> {
        Ok(None)
    }

    fn save(&self, _key: &SlotKey, _document: &PersistedAnswers) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only storage".to_string()))
    }

    fn remove(&self, _key: &SlotKey) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only storage".to_string()))
    }
}
