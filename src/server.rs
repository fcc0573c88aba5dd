//! Serving the router over TCP.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::http;
use crate::registry::Registry;

/// Bind `addr` and serve until Ctrl+C or SIGTERM.
pub async fn serve<R: Registry + 'static>(
    registry: Arc<R>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    serve_with_shutdown(listener, registry, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve_with_shutdown<R, F>(
    listener: TcpListener,
    registry: Arc<R>,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    R: Registry + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(addr = %listener.local_addr()?, "item registry listening");

    axum::serve(listener, http::router(registry))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolves on the first Ctrl+C or (on unix) SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
