//! # Database Models
//!
//! Data structures that map to the `users` table and to the JSON wire
//! payloads. The stored entity and the request shapes are kept separate:
//! clients never supply an `id`, the database assigns it.

use serde::{Deserialize, Serialize};

/// A stored user account.
///
/// This is both the row shape (`sqlx::FromRow`) and the response body
/// (`Serialize`). The password is stored and returned exactly as the client
/// provided it — no hashing happens anywhere in this service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Auto-incremented primary key, assigned on insert and never changed.
    pub id: i64,

    pub name: String,

    /// Unique per user; also the lookup key for update and delete.
    pub email: String,

    pub age: i64,

    /// Plaintext, compared with exact string equality on login.
    pub password: String,
}

/// Registration payload. Reused as the update payload, where `email` selects
/// the row and the remaining fields overwrite it.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i64,
}

/// Credential pair carried in the body of login and delete requests.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
