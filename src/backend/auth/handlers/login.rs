/**
 * Login Handlers
 *
 * This module implements the two token endpoints:
 *
 * - `POST /token` with a JSON body
 * - `POST /login` with an `application/x-www-form-urlencoded` body, the
 *   shape OAuth2 password-flow clients send
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a signed access token
 *
 * # Security
 *
 * - Unknown user and wrong password both return 401 with the same body
 * - Responses carry `WWW-Authenticate: Bearer` on failure
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::{FormRejection, JsonRejection}, State},
    response::Json,
    Form,
};

use crate::backend::auth::handlers::types::CredentialsRequest;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::AccessToken;
use crate::backend::error::BackendError;

/// Token handler (JSON body)
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the store or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /token HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "correct horse" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "bearer"
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<AccessToken>, BackendError> {
    let Json(request) = payload?;
    issue_for_credentials(&auth, request).await.map(Json)
}

/// Login handler (form body)
///
/// Same contract as [`login`], for clients that post form fields.
pub async fn login_form(
    State(auth): State<AuthService>,
    payload: Result<Form<CredentialsRequest>, FormRejection>,
) -> Result<Json<AccessToken>, BackendError> {
    let Form(request) = payload?;
    issue_for_credentials(&auth, request).await.map(Json)
}

async fn issue_for_credentials(
    auth: &AuthService,
    request: CredentialsRequest,
) -> Result<AccessToken, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let user = auth.authenticate(&request.username, &request.password).await?;
    let token = auth.issue_token(user.id)?;

    tracing::info!("User logged in successfully: {} (id {})", user.username, user.id);
    Ok(token)
}
