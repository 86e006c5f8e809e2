//! # Middleware Module
//!
//! Cross-cutting request interceptors.
//!
//! - `auth`: rejects mutating requests that carry no `Authorization` header

pub mod auth;
