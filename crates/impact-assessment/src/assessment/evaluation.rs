use std::sync::Arc;

use serde::Serialize;

use super::answers::AnswerSheet;
use super::catalog::QuestionCatalog;
use super::domain::Dimension;
use super::progress::{ProgressReport, ProgressTracker};
use super::recommendations::{RecommendationMatcher, RuleTable, StageRecommendations};
use super::scoring::{ScoreReport, ScoringConfig, ScoringEngine};

/// Number of leading General questions echoed in the report header.
const GENERAL_INFO_QUESTIONS: usize = 4;

/// Composes scoring, matching and progress over one shared catalog.
pub struct EvaluationEngine {
    catalog: Arc<QuestionCatalog>,
    rules: Arc<RuleTable>,
    scoring: ScoringEngine,
    matcher: RecommendationMatcher,
    progress: ProgressTracker,
}

impl EvaluationEngine {
    pub fn standard() -> Self {
        Self::new(
            Arc::new(QuestionCatalog::standard()),
            Arc::new(RuleTable::standard()),
            ScoringConfig::default(),
        )
    }

    pub fn new(catalog: Arc<QuestionCatalog>, rules: Arc<RuleTable>, config: ScoringConfig) -> Self {
        let scoring = ScoringEngine::new(catalog.clone(), config);
        let matcher = RecommendationMatcher::new(catalog.clone(), rules.clone());
        let progress = ProgressTracker::new(catalog.clone());
        Self {
            catalog,
            rules,
            scoring,
            matcher,
            progress,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn matcher(&self) -> &RecommendationMatcher {
        &self.matcher
    }

    pub fn progress_tracker(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Full snapshot for one answer sheet.
    pub fn evaluate(&self, answers: &AnswerSheet) -> Evaluation {
        Evaluation {
            score: self.scoring.score(answers),
            progress: self.progress.progress(answers),
            recommendations: self.matcher.matches(answers),
            general_info: self.general_info(answers),
        }
    }

    fn general_info(&self, answers: &AnswerSheet) -> Vec<GeneralInfoEntry> {
        self.catalog
            .questions_for_dimension(Dimension::General)
            .into_iter()
            .take(GENERAL_INFO_QUESTIONS)
            .map(|question| GeneralInfoEntry {
                question_id: question.id,
                question: question.text,
                answer: answers.get(question.id).display(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralInfoEntry {
    pub question_id: &'static str,
    pub question: &'static str,
    pub answer: String,
}

/// Everything the presentation layer renders for a respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub score: ScoreReport,
    pub progress: ProgressReport,
    pub recommendations: Vec<StageRecommendations>,
    pub general_info: Vec<GeneralInfoEntry>,
}

impl Evaluation {
    pub fn total_score(&self) -> f64 {
        self.score.total
    }

    pub fn completion_pct(&self) -> f64 {
        self.progress.completion_pct
    }

    pub fn recommendation_count(&self) -> usize {
        self.recommendations
            .iter()
            .map(|group| group.recommendations.len())
            .sum()
    }
}
