//! Atlas server application
//!
//! Binary entry point for the planet registry REST service: parses
//! arguments, initializes logging and the registry, then serves the HTTP
//! API until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use atlas_core::RegistryBuilder;
use atlas_server::{args::Args, http};
use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        host,
        port,
    } = Args::parse();

    let registry = RegistryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize registry")?;

    let app = http::build_router(Arc::new(registry));

    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Atlas listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

/// Resolves once ctrl-c is received, triggering graceful shutdown.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Keep serving; shutting down on a broken signal handler
            // would take the API down for no reason
            error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
