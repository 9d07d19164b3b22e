use std::sync::Arc;

use serde::Serialize;

use super::answers::AnswerSheet;
use super::catalog::QuestionCatalog;
use super::domain::Dimension;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionProgress {
    pub dimension: Dimension,
    pub label: &'static str,
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub answered: usize,
    pub total: usize,
    pub completion_pct: f64,
    pub dimensions: Vec<DimensionProgress>,
}

impl ProgressReport {
    pub fn is_dimension_complete(&self, dimension: Dimension) -> bool {
        self.dimensions
            .iter()
            .any(|entry| entry.dimension == dimension && entry.complete)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

/// Completion derived from the answer sheet. Only catalog questions count,
/// and a not-applicable answer counts as answered.
pub struct ProgressTracker {
    catalog: Arc<QuestionCatalog>,
}

impl ProgressTracker {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn progress(&self, answers: &AnswerSheet) -> ProgressReport {
        let dimensions: Vec<DimensionProgress> = Dimension::ordered()
            .into_iter()
            .map(|dimension| {
                let questions = self.catalog.questions_for_dimension(dimension);
                let answered = questions
                    .iter()
                    .filter(|question| answers.is_answered(question.id))
                    .count();
                DimensionProgress {
                    dimension,
                    label: dimension.label(),
                    answered,
                    total: questions.len(),
                    complete: answered == questions.len(),
                }
            })
            .collect();

        let answered = dimensions.iter().map(|entry| entry.answered).sum();
        let total = self.catalog.len();
        let completion_pct = if total == 0 {
            0.0
        } else {
            answered as f64 / total as f64 * 100.0
        };

        ProgressReport {
            answered,
            total,
            completion_pct,
            dimensions,
        }
    }
}
