//! # User Handlers
//!
//! One handler per user operation: list, login, register, update, delete.
//! Each is a single pass: decode the body, validate, call the storage
//! layer, encode the result. Responses serialize the stored row as-is,
//! password included.

use crate::db::models::{LoginRequest, User, UserRequest};
use crate::db::users;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};

/// Unwrap a JSON body extraction, turning axum's rejection (malformed JSON,
/// wrong content type, missing fields) into a 400 instead of axum's default
/// 415/422 responses.
fn decoded<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    let Json(body) =
        payload.map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;
    Ok(body)
}

/// GET / — every stored user, in database order.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let all = users::get_all(&state.db).await?;

    Ok(Json(all))
}

/// GET /user — login with a body-carried credential pair.
///
/// Both fields must be non-empty; a pair that matches no row is a 401, not
/// a 404, so callers can't probe which emails exist.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<User>> {
    let req = decoded(payload)?;

    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Missing email or password".to_string(),
        ));
    }

    match users::find_by_credentials(&state.db, &req.email, &req.password).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        )),
    }
}

/// POST /user — register a new account.
///
/// A duplicate email trips the UNIQUE constraint and surfaces as a storage
/// error (500).
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> AppResult<Json<User>> {
    let req = decoded(payload)?;

    let user = users::create_user(&state.db, &req).await?;

    Ok(Json(user))
}

/// PUT /user — overwrite name, password and age for the given email.
///
/// The email is the lookup key and is never changed. The response echoes
/// the request shape; since clients don't send an id, none is returned.
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> AppResult<Json<User>> {
    let req = decoded(payload)?;

    let user = users::update_user(
        &state.db,
        User {
            id: 0,
            name: req.name,
            email: req.email,
            age: req.age,
            password: req.password,
        },
    )
    .await?;

    Ok(Json(user))
}

/// DELETE /user — remove the account matching the body-carried credential
/// pair. Absent pair → 404.
pub async fn delete_user(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<User>> {
    let req = decoded(payload)?;

    let user = users::delete_user(&state.db, &req.email, &req.password).await?;

    Ok(Json(user))
}
