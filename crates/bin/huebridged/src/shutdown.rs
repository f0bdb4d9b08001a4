//! Serving with a bounded graceful shutdown.
//!
//! Once the shutdown signal fires the listener stops accepting connections
//! and in-flight requests get `grace` to finish. After that the server task
//! is dropped together with whatever bridge calls it was still awaiting.

use std::future::Future;
use std::io;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Resolves on the first SIGINT (Ctrl-C).
pub async fn interrupt() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for interrupt signal");
        std::future::pending::<()>().await;
    }
}

/// Serve `app` on `listener` until `signal` resolves, then drain for at most
/// `grace`.
///
/// # Errors
///
/// Returns an error if the server fails before the signal fires or while
/// draining.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    signal: impl Future<Output = ()>,
    grace: Duration,
) -> io::Result<()> {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            return result.map_err(io::Error::other)?;
        }
        () = signal => {}
    }

    tracing::info!(?grace, "shutting down");
    let _ = stop_tx.send(());

    if let Ok(result) = tokio::time::timeout(grace, &mut server).await {
        result.map_err(io::Error::other)?
    } else {
        tracing::warn!(?grace, "grace period elapsed with requests still in flight");
        server.abort();
        Ok(())
    }
}
