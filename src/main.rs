//! # User API Server
//!
//! Minimal CRUD service for user accounts over a single SQLite table:
//! register, login, list, update and delete, all as JSON over HTTP.
//!
//! Two deliberate simplifications to be aware of:
//! - Passwords are stored and compared in plaintext.
//! - The "auth" on mutating routes only checks that an `Authorization`
//!   header is present; the value is never verified.

mod config; // Environment-driven configuration
mod db; // Database operations and models
mod error; // Error types and HTTP status mapping
mod handlers; // HTTP route handlers and router
mod middleware; // Authorization-header gate
mod state; // Shared application state

use crate::config::Config;
use crate::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, filterable via RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // Opens the database pool and ensures the users table exists.
    let app_state = AppState::new(&config).await?;
    tracing::info!("Application state initialized");

    let app = handlers::router(app_state);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
