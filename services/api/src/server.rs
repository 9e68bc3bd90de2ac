use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryChecklistRepository};
use crate::routes::with_checklist_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use travel_ready::checklist::ChecklistService;
use travel_ready::config::AppConfig;
use travel_ready::error::AppError;
use travel_ready::telemetry;
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
    };

    let repository = Arc::new(InMemoryChecklistRepository::default());
    let checklist_service = Arc::new(ChecklistService::new(repository, config.checklist));

    let app = with_checklist_routes(checklist_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        app = %config.app_name,
        ?config.environment,
        %addr,
        min_items = config.checklist.minimum_items,
        max_items = config.checklist.maximum_items,
        "checklist service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
