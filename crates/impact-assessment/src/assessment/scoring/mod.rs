mod config;
mod policy;
mod rules;

pub use config::{
    ScoringConfig, HIGH_IMPACT_CEILING, LOW_IMPACT_CEILING, MIN_SCORE, MODERATE_IMPACT_CEILING,
};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use super::answers::AnswerSheet;
use super::catalog::QuestionCatalog;
use super::domain::{Dimension, ImpactLevel};
use rules::{contribution, Contribution};

/// Pure function of the answer sheet: weighted total, per-dimension totals, impact band.
#[derive(Debug)]
pub struct ScoringEngine {
    catalog: Arc<QuestionCatalog>,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<QuestionCatalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, answers: &AnswerSheet) -> ScoreReport {
        let mut by_dimension: BTreeMap<Dimension, f64> = Dimension::ordered()
            .into_iter()
            .map(|dimension| (dimension, 0.0))
            .collect();
        let mut raw_total = 0.0;

        for question in self.catalog.questions() {
            if !question.contributes {
                continue;
            }

            match contribution(question, answers.get(question.id)) {
                Contribution::Points(points) => {
                    raw_total += points;
                    *by_dimension.entry(question.dimension).or_insert(0.0) += points;
                }
                Contribution::Defective => {
                    warn!(
                        question_id = question.id,
                        "scored question carries no usable scoring rule; skipping"
                    );
                }
            }
        }

        let total = raw_total.max(self.config.min_score);
        let max_score = self.catalog.max_score();

        ScoreReport {
            raw_total,
            total,
            impact_level: policy::classify(total, &self.config),
            scale_position_pct: policy::scale_position(total, self.config.min_score, max_score),
            max_score,
            by_dimension,
        }
    }

    pub fn total(&self, answers: &AnswerSheet) -> f64 {
        self.score(answers).total
    }
}

/// Scoring output handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Sum of contributions before the floor is applied.
    pub raw_total: f64,
    pub total: f64,
    pub impact_level: ImpactLevel,
    pub scale_position_pct: f64,
    pub max_score: f64,
    /// Unfloored totals for every dimension, including those with no answers.
    pub by_dimension: BTreeMap<Dimension, f64>,
}

impl ScoreReport {
    pub fn dimension_score(&self, dimension: Dimension) -> f64 {
        self.by_dimension.get(&dimension).copied().unwrap_or(0.0)
    }

    pub fn impact_label(&self) -> &'static str {
        self.impact_level.label()
    }
}
