//! # Application State
//!
//! The shared state handed to every request handler. The only shared
//! resource is the database pool; axum clones the state per request, which
//! is cheap because `SqlitePool` is itself a cheaply clonable handle.

use crate::config::Config;
use crate::db;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;

/// Shared application state.
///
/// There is no other cross-request mutable state: every request is a
/// single pass through decode → storage → encode.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database. The pool handles reuse and
    /// lifecycle; SQLite handles locking for concurrent reads and writes.
    pub db: SqlitePool,
}

impl AppState {
    /// Connect to the database and make sure the `users` table exists.
    ///
    /// Schema setup is a plain `CREATE TABLE IF NOT EXISTS` at startup —
    /// deliberately not a migration system.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePool::connect(&config.database_url).await?;

        db::users::ensure_schema(&db).await?;

        Ok(AppState { db })
    }
}
