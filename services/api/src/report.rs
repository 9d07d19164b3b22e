use crate::infra::{parse_answer, slot_store};
use clap::Args;
use impact_assessment::assessment::{
    AnswerReceipt, AnswerSheet, AssessmentSession, Evaluation, EvaluationEngine,
    EvaluationRequest, FileSlotStore, QuestionCatalog, SessionNotice, MIN_SCORE,
};
use impact_assessment::config::AppConfig;
use impact_assessment::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AnswerArgs {
    /// Respondent identity, usually an e-mail address
    pub(crate) respondent: String,
    /// Question identifier, e.g. q13
    pub(crate) question_id: String,
    /// Answer value; multi-select questions take one value per option
    #[arg(required = true, num_args = 1..)]
    pub(crate) values: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ClearArgs {
    pub(crate) respondent: String,
    pub(crate) question_id: String,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    pub(crate) respondent: String,
    /// Print the evaluation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file with an "answers" map (a saved slot works too)
    #[arg(long)]
    pub(crate) answers_file: PathBuf,
    #[arg(long)]
    pub(crate) json: bool,
}

fn open_session(
    config: &AppConfig,
    data_dir: Option<PathBuf>,
    engine: Arc<EvaluationEngine>,
    respondent: &str,
) -> AssessmentSession<FileSlotStore> {
    let store = Arc::new(slot_store(config, data_dir));
    AssessmentSession::open(respondent, engine, store)
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    render_catalog(&catalog);
    Ok(())
}

pub(crate) fn run_answer(
    config: &AppConfig,
    data_dir: Option<PathBuf>,
    args: AnswerArgs,
) -> Result<(), AppError> {
    let engine = Arc::new(EvaluationEngine::standard());
    let question = engine
        .catalog()
        .question(&args.question_id)
        .ok_or_else(|| AppError::Input(format!("unknown question '{}'", args.question_id)))?;
    let answer = parse_answer(question, &args.values)?;

    let mut session = open_session(config, data_dir, engine.clone(), &args.respondent);
    let receipt = session.answer(&args.question_id, answer)?;
    info!(respondent = %args.respondent, question_id = %args.question_id, "answer recorded");
    render_notices(&session.take_notices());
    render_receipt(&receipt);
    Ok(())
}

pub(crate) fn run_clear(
    config: &AppConfig,
    data_dir: Option<PathBuf>,
    args: ClearArgs,
) -> Result<(), AppError> {
    let engine = Arc::new(EvaluationEngine::standard());
    let mut session = open_session(config, data_dir, engine, &args.respondent);
    let receipt = session.clear(&args.question_id)?;
    render_notices(&session.take_notices());
    render_receipt(&receipt);
    Ok(())
}

pub(crate) fn run_report(
    config: &AppConfig,
    data_dir: Option<PathBuf>,
    args: ReportArgs,
) -> Result<(), AppError> {
    let engine = Arc::new(EvaluationEngine::standard());
    let mut session = open_session(config, data_dir, engine, &args.respondent);
    render_notices(&session.take_notices());
    let evaluation = session.evaluate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("Evaluación de impacto para {}", args.respondent);
        render_evaluation(&evaluation);
    }
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read(&args.answers_file)?;
    let request: EvaluationRequest = serde_json::from_slice(&raw)?;
    let engine = EvaluationEngine::standard();
    let answers = AnswerSheet::validated(engine.catalog(), request.answers)?;
    let evaluation = engine.evaluate(&answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("Evaluación de impacto ({})", args.answers_file.display());
        render_evaluation(&evaluation);
    }
    Ok(())
}

fn render_catalog(catalog: &QuestionCatalog) {
    println!("Cuestionario de evaluación de impacto ({} preguntas)", catalog.len());
    for group in catalog.outline() {
        println!("\n{}", group.label);
        for entry in &group.questions {
            println!(
                "  {} [{}] {} ({})",
                entry.number,
                entry.question.id,
                entry.question.text,
                entry.question.kind.label()
            );
            for option in &entry.question.options {
                println!("      - {}", option.value);
            }
        }
    }
}

fn render_notices(notices: &[SessionNotice]) {
    for notice in notices {
        eprintln!("Aviso: {notice}");
    }
}

fn render_receipt(receipt: &AnswerReceipt) {
    println!(
        "{}: puntaje total {:.2} | {:.0}% completado{}",
        receipt.question_id,
        receipt.total_score,
        receipt.completion_pct,
        if receipt.persisted {
            ""
        } else {
            " | sin guardar"
        }
    );
}

fn render_evaluation(evaluation: &Evaluation) {
    println!("\nInformación general");
    for entry in &evaluation.general_info {
        let answer = if entry.answer.is_empty() {
            "(sin respuesta)"
        } else {
            entry.answer.as_str()
        };
        println!("- {}: {}", entry.question, answer);
    }

    let score = &evaluation.score;
    println!(
        "\nPuntaje total {:.2} (mínimo {:.2}, máximo {:.2}) | {}",
        score.total,
        MIN_SCORE,
        score.max_score,
        score.impact_label()
    );
    println!("Posición en la escala: {:.0}%", score.scale_position_pct);
    println!("{}", score.impact_level.guidance());

    println!(
        "\nAvance {:.0}% ({}/{} preguntas)",
        evaluation.progress.completion_pct,
        evaluation.progress.answered,
        evaluation.progress.total
    );
    for entry in &evaluation.progress.dimensions {
        println!(
            "- {}: {}/{} | puntaje {:.2}{}",
            entry.label,
            entry.answered,
            entry.total,
            score.dimension_score(entry.dimension),
            if entry.complete { " | completa" } else { "" }
        );
    }

    if evaluation.recommendations.is_empty() {
        println!("\nSin recomendaciones para las respuestas actuales.");
        return;
    }

    println!("\nRecomendaciones ({})", evaluation.recommendation_count());
    for group in &evaluation.recommendations {
        println!("\n{}", group.stage_label);
        for recommendation in &group.recommendations {
            let triggers: Vec<String> = recommendation
                .triggers
                .iter()
                .map(|trigger| format!("{} ({})", trigger.number, trigger.answer))
                .collect();
            println!("- [{}] {}", triggers.join(", "), recommendation.text);
            if let Some(resource) = recommendation.resource {
                if resource.url.is_empty() {
                    println!("  Recurso: {}", resource.label);
                } else {
                    println!("  Recurso: {} <{}>", resource.label, resource.url);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_assessment::assessment::{Answer, AnswerSlotStore, SlotKey};
    use impact_assessment::config::{
        AppEnvironment, ServerConfig, StorageConfig, TelemetryConfig,
    };

    fn config(data_dir: &std::path::Path) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
            storage: StorageConfig {
                data_dir: data_dir.to_path_buf(),
            },
        }
    }

    fn answer_args(question_id: &str, values: &[&str]) -> AnswerArgs {
        AnswerArgs {
            respondent: "x@example.com".to_string(),
            question_id: question_id.to_string(),
            values: values.iter().map(|value| value.to_string()).collect(),
        }
    }

    #[test]
    fn answers_are_saved_under_the_configured_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config(dir.path());

        run_answer(&config, None, answer_args("q50", &["no", "aplica"])).expect("answer");
        run_answer(&config, None, answer_args("q13", &["sí"])).expect("answer");
        run_clear(
            &config,
            None,
            ClearArgs {
                respondent: "x@example.com".to_string(),
                question_id: "q13".to_string(),
            },
        )
        .expect("clear");

        let slot = FileSlotStore::new(dir.path())
            .load(&SlotKey::for_respondent("x@example.com"))
            .expect("readable")
            .expect("saved");
        assert_eq!(slot.answers.len(), 1);
        assert_eq!(slot.answers["q50"], Answer::NotApplicable);

        run_report(
            &config,
            None,
            ReportArgs {
                respondent: "x@example.com".to_string(),
                json: true,
            },
        )
        .expect("report");
    }

    #[test]
    fn data_dir_flag_overrides_the_configured_directory() {
        let configured = tempfile::tempdir().expect("temp dir");
        let flagged = tempfile::tempdir().expect("temp dir");
        let config = config(configured.path());

        run_answer(
            &config,
            Some(flagged.path().to_path_buf()),
            answer_args("q5", &["yes"]),
        )
        .expect("answer");

        let key = SlotKey::for_respondent("x@example.com");
        assert!(FileSlotStore::new(flagged.path())
            .load(&key)
            .expect("readable")
            .is_some());
        assert!(FileSlotStore::new(configured.path())
            .load(&key)
            .expect("readable")
            .is_none());
    }

    #[test]
    fn unparseable_values_are_rejected_before_anything_is_saved() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config(dir.path());

        let err = run_answer(&config, None, answer_args("q5", &["quizás"]))
            .expect_err("not a yes/no value");

        assert!(matches!(err, AppError::Input(_)));
        assert_eq!(std::fs::read_dir(dir.path()).expect("dir").count(), 0);
    }

    #[test]
    fn evaluate_reads_answer_files_and_rejects_bad_answers() {
        let dir = tempfile::tempdir().expect("temp dir");
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"answers": {"q13": true, "q32": "No"}}"#).expect("write");
        std::fs::write(&bad, r#"{"answers": {"q32": "Quizás"}}"#).expect("write");

        run_evaluate(EvaluateArgs {
            answers_file: good,
            json: false,
        })
        .expect("evaluates");
        let err = run_evaluate(EvaluateArgs {
            answers_file: bad,
            json: true,
        })
        .expect_err("unknown option");

        assert!(matches!(err, AppError::Answer(_)));
    }
}
