//! # HTTP Request Handlers
//!
//! Route handlers and router construction.
//!
//! ## Submodules
//! - `health`: liveness endpoint
//! - `users`: list, login, register, update and delete
//!
//! ## Handler Pattern
//! Handlers are async functions that extract what they need from the
//! request (shared state, JSON body), call into the storage layer, and
//! return either a JSON response or an `AppError` that axum converts to
//! the right status code.

pub mod health;
pub mod users;

use crate::middleware;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// All user operations share the `/user` path and differ by verb; a verb
/// outside the registered set gets a 405 from axum's method router. PUT and
/// DELETE are gated by [`middleware::auth::require_auth`], so they answer
/// 401 before the handler runs when no `Authorization` header is present.
pub fn router(state: AppState) -> Router {
    // Mutating routes sit behind the credential-header check. route_layer
    // keeps the gate off the 405 fallback for unregistered verbs.
    let protected = put(users::update_user)
        .delete(users::delete_user)
        .route_layer(axum_middleware::from_fn(middleware::auth::require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(users::list_users))
        .route("/health", get(health::health_check))
        .route(
            "/user",
            get(users::login).post(users::register).merge(protected),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
