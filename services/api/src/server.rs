use crate::cli::ServeArgs;
use crate::infra::{calculator_service, AppState};
use crate::routes::with_calculator_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fizzy::config::AppConfig;
use fizzy::error::AppError;
use fizzy::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_calculator_routes(Arc::new(calculator_service()))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fizzy calculator service ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(readiness_flag))
        .await?;
    info!("fizzy calculator service stopped");
    Ok(())
}

/// Resolves on Ctrl-C, marking the service unready so `/ready` fails while requests drain.
async fn shutdown_signal(readiness: Arc<AtomicBool>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received, draining connections"),
        Err(err) => {
            warn!(%err, "unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
    readiness.store(false, Ordering::Release);
}
