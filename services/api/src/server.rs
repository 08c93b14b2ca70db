use crate::cli::ServeArgs;
use crate::infra::{workforce_service, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hr_analytics::accounts::{AccountService, InMemoryUserStore};
use hr_analytics::config::AppConfig;
use hr_analytics::error::AppError;
use hr_analytics::telemetry;
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
    if let Some(dataset) = args.dataset.take() {
        config.dataset.path = Some(dataset);
    }

    telemetry::init(&config.telemetry)?;

    let workforce = workforce_service(config.dataset.path.as_deref())?;
    if let Some(path) = &config.dataset.path {
        info!(dataset = %path.display(), "employee store seeded");
    }
    let accounts = Arc::new(AccountService::new(Arc::new(InMemoryUserStore::new())));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        workforce: workforce.clone(),
    };

    let app = with_service_routes(workforce, accounts)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hr analytics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
