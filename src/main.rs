#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use mission::catalog::{PLANETS, RECENT_MISSIONS, check_catalog};

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    // Local overrides only; a missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "voyager failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Non-fatal: a bad table only degrades the page.
    match check_catalog(PLANETS, RECENT_MISSIONS) {
        Ok(()) => tracing::info!(planets = PLANETS.len(), missions = RECENT_MISSIONS.len(), "catalog loaded"),
        Err(e) => tracing::warn!(error = %e, "catalog inconsistency"),
    }

    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), "voyager listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
