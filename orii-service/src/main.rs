use orii_service::config::OriiConfig;
use orii_service::models::ORII_O1;
use orii_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = OriiConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;
    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        model = ORII_O1.name,
        version = ORII_O1.version,
        "Starting Orii-O1 API"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Server stopped");
    Ok(())
}
