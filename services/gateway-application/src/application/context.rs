use crate::application::config::ApplicationConfig;
use crate::http::router::create_router;
use crate::processor::processor_registry::ProcessorRegistry;
use anyhow::Result;
use common::http::http_server::HttpServer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct ApplicationState {
    processor_registry: ProcessorRegistry,
}

impl ApplicationState {
    pub const fn processor_registry(&self) -> &ProcessorRegistry {
        &self.processor_registry
    }
}

pub type SharedApplicationState = Arc<ApplicationState>;

pub fn create_application_state(config: &ApplicationConfig) -> Result<SharedApplicationState> {
    let processor_registry = ProcessorRegistry::new(config)?;

    for processor in processor_registry.processors() {
        tracing::info!(
            module = processor.module(),
            url = processor.health_url(),
            "Processor configured"
        );
    }

    Ok(Arc::new(ApplicationState { processor_registry }))
}

pub struct Application {
    http_server: HttpServer,
}

impl Application {
    pub const fn http_server(&self) -> &HttpServer {
        &self.http_server
    }
}

pub fn create_application(config: &ApplicationConfig) -> Result<Application> {
    let application_state = create_application_state(config)?;
    let http_server = HttpServer::new(config.port(), create_router(application_state));

    Ok(Application { http_server })
}

pub async fn start_application(
    application: Application,
    shutdown_token: CancellationToken,
) -> Result<()> {
    let mut handles = [application.http_server().start(shutdown_token)];

    for handle in handles.iter_mut().flatten() {
        handle.await??;
    }

    Ok(())
}
