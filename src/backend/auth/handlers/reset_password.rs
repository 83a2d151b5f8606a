/**
 * Password Reset Handlers
 *
 * Two-step reset flow:
 *
 * 1. `POST /forgot-password` with a username. If the account exists a reset
 *    token is issued. The response is 202 either way, so the endpoint cannot
 *    be used to probe for usernames.
 * 2. `POST /reset-password` with the token and a new password.
 *
 * Reset tokens are bound to the password hash they were issued against and
 * stop working once the password changes.
 *
 * There is no outbound mail channel. The handler only logs that a token
 * was issued; embedding code obtains the token from
 * `AuthService::forgot_password`.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{ForgotPasswordRequest, ResetPasswordRequest, UserResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Forgot password handler
///
/// Always answers `202 Accepted` with an empty JSON object.
///
/// # Example Request
///
/// ```http
/// POST /forgot-password HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice" }
/// ```
pub async fn forgot_password(
    State(auth): State<AuthService>,
    payload: Result<Json<ForgotPasswordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), BackendError> {
    let Json(request) = payload?;

    if auth.forgot_password(&request.username).await?.is_some() {
        tracing::debug!("Reset token issued for {}", request.username);
    }

    Ok((StatusCode::ACCEPTED, Json(serde_json::json!({}))))
}

/// Reset password handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the token is invalid, expired, or already used
/// * `422 Unprocessable Entity` - If the new password is rejected
///
/// # Example Request
///
/// ```http
/// POST /reset-password HTTP/1.1
/// Content-Type: application/json
///
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "password": "new secret" }
/// ```
pub async fn reset_password(
    State(auth): State<AuthService>,
    payload: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, BackendError> {
    let Json(request) = payload?;

    let user = auth.reset_password(&request.token, &request.password).await?;

    Ok(Json(user.into()))
}
