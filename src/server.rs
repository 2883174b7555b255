//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, schema setup, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{connect, init_schema};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Upper bound on pooled SQLite connections.
const DB_MAX_CONNECTIONS: u32 = 8;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema (idempotent)
/// - Axum HTTP server on all interfaces
///
/// Stops on Ctrl-C and closes the pool before returning.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or initialized
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config.sqlite_db, DB_MAX_CONNECTIONS)
        .await
        .with_context(|| format!("Failed to open database {}", config.sqlite_db))?;

    init_schema(&pool)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);
    let state = AppState::new(
        pool.clone(),
        config.code_length,
        &config.url_prefix,
        config.main_page(),
        config.auth,
    );

    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
