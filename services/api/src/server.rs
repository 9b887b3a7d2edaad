use crate::cli::ServeArgs;
use crate::demo::seed_applicants;
use crate::infra::{ApiDocs, AppState};
use crate::routes::build_app;
use axum::Router;
use axum_prometheus::PrometheusMetricLayer;
use job_applicants::applicants::{ApplicantService, InMemoryApplicantRepository};
use job_applicants::config::AppConfig;
use job_applicants::error::AppError;
use job_applicants::telemetry;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        docs: Arc::new(ApiDocs::load(&config.docs.openapi_path)),
        service_version: Arc::from(config.service_version.as_str()),
    };

    let repository = Arc::new(InMemoryApplicantRepository::default());
    let applicant_service = Arc::new(ApplicantService::new(repository));
    if args.seed {
        let created = seed_applicants(applicant_service.as_ref());
        info!(created, "seed roster loaded");
    }

    let app = build_app(applicant_service, app_state, &config.server.cors_origins)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!(
        ?config.environment,
        version = %config.service_version,
        %addr,
        "job applicants service ready"
    );

    serve(listener, app, readiness_flag, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
///
/// Readiness is raised once serving starts and lowered as soon as shutdown begins.
pub(crate) async fn serve<F>(
    listener: TcpListener,
    app: Router,
    readiness: Arc<AtomicBool>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    readiness.store(true, Ordering::Release);

    let draining = readiness.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            draining.store(false, Ordering::Release);
            info!("shutting down, draining in-flight requests");
        })
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
