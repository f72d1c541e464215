//! # Server Lifecycle
//!
//! Startup order:
//!
//! 1. Build [`AppState`] from the configuration.
//! 2. Run the first refresh cycle inline, then hand the scheduler to its
//!    own task.
//! 3. Bind the listener and serve until the shutdown future resolves.
//! 4. Cancel the scheduler and wait for it to exit.

use std::future::Future;
use std::net::SocketAddr;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::refresh::RefreshScheduler;
use crate::state::{AppConfig, AppState};

/// Failure to start or run the HTTP server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("cannot bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the service until `shutdown` resolves.
pub async fn run(
    config: AppConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(?config, "starting election catalog");

    let state = AppState::new(config);
    let cancel = CancellationToken::new();
    let refresher = RefreshScheduler::new(
        state.file_store(),
        state.catalog.clone(),
        state.config.refresh_interval,
    )
    .start(cancel.clone())
    .await;

    let app = crate::app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("election catalog listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve);

    cancel.cancel();
    if let Err(e) = refresher.await {
        tracing::warn!(error = %e, "refresh task ended abnormally");
    }
    served
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
