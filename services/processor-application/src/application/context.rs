use crate::application::config::ApplicationConfig;
use crate::http::router::create_router;
use anyhow::Result;
use common::http::http_server::HttpServer;
use tokio_util::sync::CancellationToken;

pub struct Application {
    http_server: HttpServer,
}

impl Application {
    pub const fn http_server(&self) -> &HttpServer {
        &self.http_server
    }
}

pub fn create_application(config: &ApplicationConfig) -> Application {
    let http_server = HttpServer::new(config.port(), create_router());

    Application { http_server }
}

pub async fn start_application(
    application: Application,
    shutdown_token: CancellationToken,
) -> Result<()> {
    tracing::info!(
        "Health check: http://localhost:{}/health",
        application.http_server().port()
    );

    let mut handles = [application.http_server().start(shutdown_token)];

    for handle in handles.iter_mut().flatten() {
        handle.await??;
    }

    Ok(())
}
