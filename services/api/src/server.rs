use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use impact_assessment::assessment::EvaluationEngine;
use impact_assessment::config::AppConfig;
use impact_assessment::error::AppError;
use impact_assessment::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = config;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(EvaluationEngine::standard());
    for defect in engine.catalog().validate(engine.rules()) {
        warn!(?defect, "question catalog defect");
    }

    let app = with_assessment_routes(engine.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        questions = engine.catalog().len(),
        "impact assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
