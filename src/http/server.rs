//! Serving loop with graceful shutdown.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

/// Serves `router` on `listener` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns the underlying I/O error when the server fails.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        tracing::info!(%address, "server listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}
