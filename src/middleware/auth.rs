use crate::error::AppError;
use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};

/// Reject the request unless a non-empty `Authorization` header is present.
///
/// Presence is the only check: the value is never parsed, verified or tied
/// to an identity. This mirrors the service's intentionally weak credential
/// contract and is a known security gap, not an oversight.
pub async fn require_auth(request: Request, next: Next) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if token.is_empty() {
        return Err(AppError::Unauthorized("Not authenticated".to_string()));
    }

    Ok(next.run(request).await)
}
