use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::answers::{AnswerError, AnswerSheet};
use super::domain::Answer;
use super::evaluation::{Evaluation, EvaluationEngine};
use super::store::{
    AnswerSlotStore, PersistedAnswers, SlotKey, StoreError, CATALOG_SCHEMA_VERSION,
};

/// Non-fatal condition surfaced to whoever drives the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum SessionNotice {
    #[error("saved answers could not be read; changes stay in memory until saved explicitly ({0})")]
    LoadFailed(String),
    #[error("answers were kept in memory only; saving failed ({0})")]
    WriteFailed(String),
    #[error("saved answers were written for catalog version {found}, current is {expected}")]
    StaleSchema { found: u32, expected: u32 },
    #[error("a saved answer was discarded ({0})")]
    DroppedAnswer(String),
}

/// Returned after every mutation so callers can refresh their view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerReceipt {
    pub question_id: String,
    pub total_score: f64,
    pub completion_pct: f64,
    pub persisted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One respondent's working copy of the questionnaire.
///
/// The session owns the answer sheet; the engine and the store are shared.
/// Every accepted mutation writes the full sheet back to the respondent's
/// slot. Write failures never abort the mutation, they are kept as notices.
/// A slot that could not be read is never overwritten implicitly: write-through
/// resumes only after a successful reload or an explicit [`save`](Self::save).
pub struct AssessmentSession<S> {
    respondent: String,
    key: SlotKey,
    engine: Arc<EvaluationEngine>,
    store: Arc<S>,
    answers: AnswerSheet,
    saved_at: Option<i64>,
    write_through: bool,
    notices: Vec<SessionNotice>,
}

impl<S> AssessmentSession<S>
where
    S: AnswerSlotStore + 'static,
{
    /// Resumes the respondent's saved answers, or starts empty when there are none.
    pub fn open(respondent: impl Into<String>, engine: Arc<EvaluationEngine>, store: Arc<S>) -> Self {
        let respondent = respondent.into();
        let key = SlotKey::for_respondent(&respondent);
        let mut session = Self {
            respondent,
            key,
            engine,
            store,
            answers: AnswerSheet::new(),
            saved_at: None,
            write_through: true,
            notices: Vec::new(),
        };
        session.load_from_store();
        session
    }

    pub fn respondent(&self) -> &str {
        &self.respondent
    }

    pub fn slot_key(&self) -> &SlotKey {
        &self.key
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Timestamp of the last successful load or save, in epoch milliseconds.
    pub fn saved_at(&self) -> Option<i64> {
        self.saved_at
    }

    pub fn answer(
        &mut self,
        question_id: &str,
        answer: Answer,
    ) -> Result<AnswerReceipt, SessionError> {
        self.answers
            .record(self.engine.catalog(), question_id, answer)?;
        Ok(self.after_mutation(question_id))
    }

    pub fn clear(&mut self, question_id: &str) -> Result<AnswerReceipt, SessionError> {
        self.answer(question_id, Answer::Unanswered)
    }

    /// Explicit save that reports a failed write to the caller.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let timestamp = Utc::now().timestamp_millis();
        let document = PersistedAnswers::new(self.answers.as_map().clone(), timestamp);
        self.store.save(&self.key, &document)?;
        self.saved_at = Some(timestamp);
        self.write_through = true;
        Ok(())
    }

    /// Replaces the in-memory sheet with whatever the slot currently holds.
    pub fn reload(&mut self) {
        self.answers = AnswerSheet::new();
        self.saved_at = None;
        self.load_from_store();
    }

    pub fn evaluate(&self) -> Evaluation {
        self.engine.evaluate(&self.answers)
    }

    pub fn notices(&self) -> &[SessionNotice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<SessionNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Whether mutations are currently written back to the slot.
    pub fn writes_through(&self) -> bool {
        self.write_through
    }

    fn after_mutation(&mut self, question_id: &str) -> AnswerReceipt {
        let persisted = if !self.write_through {
            debug!(slot = %self.key, "slot unreadable; answer kept in memory only");
            false
        } else {
            match self.save() {
                Ok(()) => true,
                Err(err) => {
                    warn!(slot = %self.key, error = %err, "answer kept in memory only");
                    self.notices.push(SessionNotice::WriteFailed(err.to_string()));
                    false
                }
            }
        };

        AnswerReceipt {
            question_id: question_id.to_string(),
            total_score: self.engine.scoring().total(&self.answers),
            completion_pct: self
                .engine
                .progress_tracker()
                .progress(&self.answers)
                .completion_pct,
            persisted,
        }
    }

    fn load_from_store(&mut self) {
        let document = match self.store.load(&self.key) {
            Ok(Some(document)) => document,
            Ok(None) => {
                self.write_through = true;
                return;
            }
            Err(err) => {
                warn!(
                    slot = %self.key,
                    error = %err,
                    "saved answers unreadable; write-through suspended"
                );
                self.notices.push(SessionNotice::LoadFailed(err.to_string()));
                self.write_through = false;
                return;
            }
        };
        self.write_through = true;

        if !document.is_current() {
            warn!(
                slot = %self.key,
                found = document.schema_version,
                expected = CATALOG_SCHEMA_VERSION,
                "saved answers predate the current catalog"
            );
            self.notices.push(SessionNotice::StaleSchema {
                found: document.schema_version,
                expected: CATALOG_SCHEMA_VERSION,
            });
        }

        for (question_id, value) in &document.unreadable {
            warn!(slot = %self.key, %question_id, "saved answer discarded");
            self.notices.push(SessionNotice::DroppedAnswer(format!(
                "question '{question_id}' holds {value}, which is not an answer"
            )));
        }

        let (answers, rejected) = AnswerSheet::restore(self.engine.catalog(), document.answers);
        for err in rejected {
            warn!(slot = %self.key, error = %err, "saved answer discarded");
            self.notices.push(SessionNotice::DroppedAnswer(err.to_string()));
        }

        info!(slot = %self.key, answers = answers.len(), "session resumed");
        self.answers = answers;
        self.saved_at = Some(document.timestamp);
    }
}
