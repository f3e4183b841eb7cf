pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::ServiceError;
use crate::state::AppState;

/// Bind and serve until Ctrl+C.
pub async fn run(config: Config) -> Result<(), ServiceError> {
    let addr = config.socket_addr();
    let app = routes::create_router().with_state(AppState::shared());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })?;

    tracing::info!(address = %addr, "DentBot responder listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
