//! Process signal handling.
//!
//! SIGINT and SIGTERM both request a graceful shutdown: the returned token is
//! cancelled, servers stop accepting connections and drain in-flight requests.

use tokio_util::sync::CancellationToken;

/// Spawns a task that cancels the returned token on the first SIGINT or SIGTERM.
pub fn install_shutdown_handler() -> CancellationToken {
    let shutdown_token = CancellationToken::new();

    let token = shutdown_token.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        token.cancel();
    });

    shutdown_token
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install SIGINT handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("SIGINT received, shutting down gracefully");
        }
        () = terminate => {
            tracing::info!("SIGTERM received, shutting down gracefully");
        }
    }
}
