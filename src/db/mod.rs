//! # Database Module
//!
//! All persistence lives here:
//! - `models`: row and request data structures
//! - `users`: CRUD operations against the `users` table

pub mod models;
pub mod users;
