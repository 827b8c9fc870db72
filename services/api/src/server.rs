use crate::cli::ServeArgs;
use crate::infra::{load_bank, AppState};
use crate::routes::with_placement_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use placement_engine::assessment::PlacementService;
use placement_engine::config::AppConfig;
use placement_engine::error::AppError;
use placement_engine::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

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
        started_at: Utc::now(),
    };

    let bank = Arc::new(load_bank(config.assessment.bank_csv.as_deref())?);
    let service = Arc::new(PlacementService::new(
        bank,
        config.assessment.quiz_length,
    ));

    let app = with_placement_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        quiz_length = config.assessment.quiz_length,
        "placement assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
