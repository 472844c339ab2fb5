use anyhow::Result;
use common::shutdown::install_shutdown_handler;
use common::telemetry::OpentelemetryHandler;
use processor_application::application::APPLICATION_NAME;
use processor_application::application::APPLICATION_VERSION;
use processor_application::application::config::ApplicationConfig;
use processor_application::application::context::create_application;
use processor_application::application::context::start_application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the OpenTelemetry stack
    let _opentelemetry_handler = OpentelemetryHandler::new(APPLICATION_NAME, APPLICATION_VERSION)?;

    let config = ApplicationConfig::from_env();
    let shutdown_token = install_shutdown_handler();

    // Start the application
    let application = create_application(&config);
    start_application(application, shutdown_token).await?;

    Ok(())
}
