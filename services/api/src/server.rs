use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_worksheet_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use seller_proceeds::config::AppConfig;
use seller_proceeds::error::AppError;
use seller_proceeds::telemetry;
use seller_proceeds::worksheet::WorksheetService;
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
    };

    let settings = config.worksheet.settings();
    info!(
        policy = ?settings.policy,
        logo = ?settings.logo_path,
        "worksheet settings loaded"
    );
    let worksheet_service = Arc::new(WorksheetService::new(settings));

    let app = with_worksheet_routes(worksheet_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "seller proceeds service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
