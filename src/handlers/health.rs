//! # Health Check Handler
//!
//! Simple liveness endpoint for load balancers and monitoring.

use axum::Json;
use serde_json::{json, Value};

/// Always answers 200 with a small JSON body. Never touches the database,
/// so it returns `Json<Value>` directly instead of `AppResult`.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "user-api"
    }))
}
