use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{Answer, InputKind, Question};

static UNANSWERED: Answer = Answer::Unanswered;

/// Current answers keyed by question identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict construction: every entry must fit the catalog.
    pub fn validated(
        catalog: &QuestionCatalog,
        raw: BTreeMap<String, Answer>,
    ) -> Result<Self, AnswerError> {
        let mut sheet = Self::new();
        for (question_id, answer) in raw {
            sheet.record(catalog, &question_id, answer)?;
        }
        Ok(sheet)
    }

    /// Lenient construction used when resuming a saved session. Entries that
    /// no longer fit the catalog are dropped and reported back.
    pub fn restore(
        catalog: &QuestionCatalog,
        raw: BTreeMap<String, Answer>,
    ) -> (Self, Vec<AnswerError>) {
        let mut sheet = Self::new();
        let mut rejected = Vec::new();
        for (question_id, answer) in raw {
            if let Err(err) = sheet.record(catalog, &question_id, answer) {
                rejected.push(err);
            }
        }
        (sheet, rejected)
    }

    pub fn get(&self, question_id: &str) -> &Answer {
        self.answers.get(question_id).unwrap_or(&UNANSWERED)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    /// Overwrites the current value. Recording `Answer::Unanswered` clears it.
    pub fn record(
        &mut self,
        catalog: &QuestionCatalog,
        question_id: &str,
        answer: Answer,
    ) -> Result<(), AnswerError> {
        let question = catalog
            .question(question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?;

        if answer == Answer::Unanswered {
            self.answers.remove(question_id);
            return Ok(());
        }

        check_shape(question, &answer)?;
        self.answers.insert(question_id.to_string(), answer);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers
            .iter()
            .map(|(question_id, answer)| (question_id.as_str(), answer))
    }

    pub fn as_map(&self) -> &BTreeMap<String, Answer> {
        &self.answers
    }
}

fn check_shape(question: &Question, answer: &Answer) -> Result<(), AnswerError> {
    let fits = match (question.kind, answer) {
        (InputKind::Text | InputKind::LongText, Answer::Text(_)) => true,
        (InputKind::Select, Answer::Text(value)) => {
            return known_option(question, value);
        }
        (InputKind::MultiSelect, Answer::MultiText(values)) => {
            for value in values {
                known_option(question, value)?;
            }
            return Ok(());
        }
        (InputKind::YesNo, Answer::Bool(_)) => true,
        (InputKind::YesNoNotApplicable, Answer::Bool(_) | Answer::NotApplicable) => true,
        _ => false,
    };

    if fits {
        Ok(())
    } else {
        Err(AnswerError::KindMismatch {
            question_id: question.id.to_string(),
            expected: question.kind.label(),
        })
    }
}

fn known_option(question: &Question, value: &str) -> Result<(), AnswerError> {
    match question.option(value) {
        Some(_) => Ok(()),
        None => Err(AnswerError::UnknownOption {
            question_id: question.id.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Raised when an answer does not fit the question it targets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("question '{question_id}' expects a {expected} answer")]
    KindMismatch {
        question_id: String,
        expected: &'static str,
    },
    #[error("'{value}' is not an option of question '{question_id}'")]
    UnknownOption { question_id: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::standard()
    }

    #[test]
    fn missing_answers_read_as_unanswered() {
        let sheet = AnswerSheet::new();
        assert_eq!(sheet.get("q5"), &Answer::Unanswered);
        assert!(!sheet.is_answered("q5"));
    }

    #[test]
    fn not_applicable_only_fits_yes_no_na_questions() {
        let catalog = catalog();
        let mut sheet = AnswerSheet::new();

        sheet
            .record(&catalog, "q50", Answer::NotApplicable)
            .expect("q50 accepts not applicable");
        let err = sheet
            .record(&catalog, "q5", Answer::NotApplicable)
            .expect_err("q5 is plain yes/no");

        assert!(matches!(err, AnswerError::KindMismatch { .. }));
        assert!(sheet.is_answered("q50"));
        assert!(!sheet.is_answered("q5"));
    }

    #[test]
    fn select_answers_must_name_a_known_option() {
        let catalog = catalog();
        let mut sheet = AnswerSheet::new();

        sheet
            .record(&catalog, "q32", Answer::Text("No".to_string()))
            .expect("known option");
        let err = sheet
            .record(&catalog, "q32", Answer::Text("Quizás".to_string()))
            .expect_err("unknown option");

        assert_eq!(
            err,
            AnswerError::UnknownOption {
                question_id: "q32".to_string(),
                value: "Quizás".to_string(),
            }
        );
        assert_eq!(sheet.get("q32"), &Answer::Text("No".to_string()));
    }

    #[test]
    fn recording_unanswered_clears_the_entry() {
        let catalog = catalog();
        let mut sheet = AnswerSheet::new();
        sheet
            .record(&catalog, "q1", Answer::Text("Proyecto".to_string()))
            .expect("text answer");

        sheet
            .record(&catalog, "q1", Answer::Unanswered)
            .expect("clear");

        assert!(sheet.is_empty());
    }

    #[test]
    fn restore_drops_entries_that_no_longer_fit() {
        let catalog = catalog();
        let mut raw = BTreeMap::new();
        raw.insert("q5".to_string(), Answer::Bool(true));
        raw.insert("q999".to_string(), Answer::Bool(true));
        raw.insert("q6".to_string(), Answer::Text("sí".to_string()));

        let (sheet, rejected) = AnswerSheet::restore(&catalog, raw);

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get("q5"), &Answer::Bool(true));
        assert_eq!(rejected.len(), 2);
        assert!(rejected.contains(&AnswerError::UnknownQuestion("q999".to_string())));
    }
}
