use impact_assessment::assessment::{Answer, FileSlotStore, InputKind, Question};
use impact_assessment::config::AppConfig;
use impact_assessment::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Slot store rooted at `--data-dir` when given, the configured directory otherwise.
pub(crate) fn slot_store(config: &AppConfig, data_dir: Option<PathBuf>) -> FileSlotStore {
    FileSlotStore::new(data_dir.unwrap_or_else(|| config.storage.data_dir.clone()))
}

pub(crate) fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "sí" | "si" | "s" | "yes" | "y" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}

fn is_not_applicable(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "na" | "n/a" | "no aplica" | "null"
    )
}

/// Turns command-line words into an answer shaped for the question.
pub(crate) fn parse_answer(question: &Question, values: &[String]) -> Result<Answer, AppError> {
    if values.is_empty() {
        return Err(AppError::Input(format!(
            "question '{}' needs a value",
            question.id
        )));
    }

    let joined = values.join(" ");
    match question.kind {
        InputKind::Text | InputKind::LongText | InputKind::Select => Ok(Answer::Text(joined)),
        InputKind::MultiSelect => Ok(Answer::MultiText(values.to_vec())),
        InputKind::YesNoNotApplicable if is_not_applicable(&joined) => Ok(Answer::NotApplicable),
        InputKind::YesNo | InputKind::YesNoNotApplicable => parse_yes_no(&joined)
            .map(Answer::Bool)
            .ok_or_else(|| {
                AppError::Input(format!(
                    "'{}' is not a yes/no value for question '{}'",
                    joined, question.id
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_assessment::assessment::QuestionCatalog;

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn yes_no_accepts_spanish_and_english_spellings() {
        for value in ["sí", "Si", "yes", "TRUE"] {
            assert_eq!(parse_yes_no(value), Some(true), "{value}");
        }
        for value in ["no", "No", "false"] {
            assert_eq!(parse_yes_no(value), Some(false), "{value}");
        }
        assert_eq!(parse_yes_no("quizás"), None);
    }

    #[test]
    fn not_applicable_only_parses_for_questions_that_allow_it() {
        let catalog = QuestionCatalog::standard();
        let q50 = catalog.question("q50").expect("q50");
        let q5 = catalog.question("q5").expect("q5");

        assert_eq!(
            parse_answer(q50, &words(&["no", "aplica"])).expect("na"),
            Answer::NotApplicable
        );
        assert!(parse_answer(q5, &words(&["na"])).is_err());
    }

    #[test]
    fn select_words_are_joined_and_multi_select_words_are_kept_apart() {
        let catalog = QuestionCatalog::standard();
        let q32 = catalog.question("q32").expect("q32");
        let q4 = catalog.question("q4").expect("q4");

        assert_eq!(
            parse_answer(q32, &words(&["Si,", "pero", "parcialmente"])).expect("select"),
            Answer::Text("Si, pero parcialmente".to_string())
        );
        assert_eq!(
            parse_answer(q4, &words(&["Utilizar enfoques innovadores"])).expect("multi"),
            Answer::MultiText(words(&["Utilizar enfoques innovadores"]))
        );
    }
}
