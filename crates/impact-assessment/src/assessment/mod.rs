//! Ethical and social impact self-assessment for public-sector AI projects.
//!
//! A fixed catalog of questions is answered by a respondent; the answers are
//! scored into an impact band, matched against a static rule table to produce
//! stage-grouped recommendations, and tracked for completion. Sessions persist
//! the answer sheet per respondent so an interrupted assessment can resume.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod progress;
pub mod recommendations;
pub mod router;
pub mod scoring;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use answers::{AnswerError, AnswerSheet};
pub use catalog::{CatalogDefect, DimensionOutline, NumberedQuestion, QuestionCatalog};
pub use domain::{
    Answer, ChoiceOption, Dimension, ImpactLevel, InputKind, Question, ScoreRule, Stage,
};
pub use evaluation::{Evaluation, EvaluationEngine, GeneralInfoEntry};
pub use progress::{DimensionProgress, ProgressReport, ProgressTracker};
pub use recommendations::{
    Candidate, Condition, MatchedRecommendation, RecommendationMatcher, RecommendationRule,
    Resource, RuleTable, StageRecommendations, TriggeringQuestion,
};
pub use router::{assessment_router, EvaluationRequest};
pub use scoring::{ScoreReport, ScoringConfig, ScoringEngine, MIN_SCORE};
pub use session::{AnswerReceipt, AssessmentSession, SessionError, SessionNotice};
pub use store::{
    AnswerSlotStore, FileSlotStore, MemorySlotStore, PersistedAnswers, SlotKey, StoreError,
    CATALOG_SCHEMA_VERSION,
};
