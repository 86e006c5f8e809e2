//! # Error Handling
//!
//! Application-wide error type and its conversion into HTTP responses.
//! Handlers return `AppResult<T>`; axum turns any `AppError` into a JSON
//! error body with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// All the ways a request can fail.
///
/// The `#[from]` on `Database` lets storage code use `?` directly on
/// `sqlx::Error`, so any insert/select/update/delete failure (including
/// unique-constraint violations) funnels into the same variant.
#[derive(Error, Debug)]
pub enum AppError {
    /// Any SQLx failure: connection trouble, constraint violations, etc.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request body or a missing required field (400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing credential header or a failed login (401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Delete target absent (404).
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Map each error variant to a status code and a client-safe message.
///
/// Database errors are logged in full server-side but the client only ever
/// sees a generic message; the other variants carry messages that are safe
/// to show.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convenience alias: `AppResult<User>` instead of `Result<User, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
