use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Serves a fully built router on every interface until the shutdown token fires.
pub struct HttpServer {
    port: u16,
    router: Router,
}

impl HttpServer {
    const DEFAULT_LISTENER_ADDR: [u8; 4] = [0, 0, 0, 0];

    pub fn new(port: u16, router: Router) -> Self {
        tracing::debug!("Initializing the HTTP server");

        Self { port, router }
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    pub fn start(&self, shutdown_token: CancellationToken) -> Vec<JoinHandle<Result<()>>> {
        tracing::info!("Starting the HTTP server on port {}", self.port);

        let port = self.port;
        let router = self.router.clone();

        vec![tokio::spawn(async move {
            Self::worker_axum(port, router, shutdown_token).await
        })]
    }

    async fn worker_axum(port: u16, router: Router, shutdown_token: CancellationToken) -> Result<()> {
        let addr = SocketAddr::from((Self::DEFAULT_LISTENER_ADDR, port));
        let listener = TcpListener::bind(addr).await?;

        Self::serve(listener, router, shutdown_token).await
    }

    /// Serves `router` on an already bound listener, draining in-flight requests on shutdown.
    pub async fn serve(
        listener: TcpListener,
        router: Router,
        shutdown_token: CancellationToken,
    ) -> Result<()> {
        tracing::info!("Starting HTTP Server on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_token.cancelled_owned())
            .await?;

        tracing::info!("HTTP Server stopped");

        Ok(())
    }
}
