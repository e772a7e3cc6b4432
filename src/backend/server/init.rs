/**
 * Server Initialization
 *
 * This module builds the Axum application and runs it until shutdown.
 *
 * # Initialization Process
 *
 * 1. Create the read-only credential store
 * 2. Wrap it in `AppState`
 * 3. Create the router with all routes and the trace layer
 * 4. Bind the listener and serve until Ctrl-C / SIGTERM
 */

use axum::Router;
use tokio::net::TcpListener;

use crate::backend::auth::credentials::CredentialStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum application with the default credential records
pub fn create_app() -> Router<()> {
    create_app_with_state(AppState::new(CredentialStore::default()))
}

/// Create the Axum application around an existing state
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    tracing::info!(
        "Initializing login server with {} credential records",
        app_state.credentials.len()
    );
    if app_state.credentials.is_empty() {
        tracing::warn!("Credential store is empty, every login will be rejected");
    }

    create_router(app_state)
}

/// Bind to the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run(config: &ServerConfig) -> std::io::Result<()> {
    let app = create_app();

    let listener = TcpListener::bind(config.addr()).await?;

    let base = config.display_url();
    tracing::info!("Server is running on {}", base);
    tracing::info!("Login endpoint: POST {}/api/login", base);
    tracing::info!("Health check: GET {}/api/health", base);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Resolve when the process receives Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::warn!("received SIGINT, shutting down"),
            Err(error) => tracing::error!(%error, "failed to receive SIGINT"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::warn!("received SIGTERM, shutting down");
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
