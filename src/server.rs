//! HTTP bridge initialization and runtime setup.

use crate::application::services::ShortLinkService;
use crate::config::Config;
use crate::infrastructure::http::HttpTransport;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Wires the production adapters into a service.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_state(config: Config) -> Result<AppState> {
    let transport = HttpTransport::new(&config.client_setting())
        .context("Failed to initialize HTTP client")?;
    let permissions = config.permission_oracle();
    let existing_url_source = config.existing_url_source;

    let service = ShortLinkService::new(Arc::new(transport), Arc::new(config), Arc::new(permissions))
        .with_existing_url_source(existing_url_source);

    Ok(AppState::new(Arc::new(service)))
}

/// Runs the bridge with the given configuration until Ctrl+C.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;

    if !config.is_configured() {
        tracing::warn!("Service URL or API signature not set; operations will fail until configured");
    }

    let state = build_state(config)?;
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Bridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
