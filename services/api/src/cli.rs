use crate::report::{
    run_answer, run_catalog, run_clear, run_evaluate, run_report, AnswerArgs, ClearArgs,
    EvaluateArgs, ReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use impact_assessment::config::AppConfig;
use impact_assessment::error::AppError;
use impact_assessment::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Impact Assessment",
    about = "Score AI projects for ethical and social impact and review the recommendations",
    version
)]
struct Cli {
    /// Directory holding saved answer slots (defaults to APP_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List every question grouped by dimension
    Catalog,
    /// Record an answer for a respondent and show the updated score
    Answer(AnswerArgs),
    /// Remove a respondent's answer to one question
    Clear(ClearArgs),
    /// Print the full evaluation for a respondent's saved answers
    Report(ReportArgs),
    /// Evaluate answers read from a JSON file without touching saved slots
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    // the server installs its own subscriber once overrides are applied
    if !matches!(command, Command::Serve(_)) {
        telemetry::init(&config.telemetry)?;
    }

    let data_dir = cli.data_dir;
    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Catalog => run_catalog(),
        Command::Answer(args) => run_answer(&config, data_dir, args),
        Command::Clear(args) => run_clear(&config, data_dir, args),
        Command::Report(args) => run_report(&config, data_dir, args),
        Command::Evaluate(args) => run_evaluate(args),
    }
}
