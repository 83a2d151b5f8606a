/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate username format and password length
 * 2. Hash password using bcrypt
 * 3. Insert the user; the store's unique constraint decides duplicates
 * 4. Return the public user record
 *
 * There is no separate "does this username exist" query: two concurrent
 * registrations race on the insert and exactly one wins.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{CredentialsRequest, UserResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - If the username or password is rejected
/// * `409 Conflict` - If the username is already taken
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "correct horse"
/// }
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 201 Created
///
/// { "id": 1, "username": "alice" }
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::info!("Register request for username: {}", request.username);

    let user = auth.register(&request.username, &request.password).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
