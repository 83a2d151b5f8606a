/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend server. Every
 * handler and service function returns `Result<_, BackendError>` and the
 * error is converted into an HTTP response at the handler boundary.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * - `InvalidCredentials` - unknown username or wrong password (indistinguishable)
 * - `InvalidToken` - bad signature, wrong audience, expired, or malformed token
 *
 * ## Domain Errors
 *
 * - `UsernameTaken` - the store rejected a duplicate username
 * - `UserNotFound` - a valid token refers to a user that no longer exists
 * - `Validation` - request values failed field validation
 * - `HandlerError` - request rejected by an extractor (malformed body, missing part)
 *
 * ## Internal Errors
 *
 * Store, migration, hashing and token-encoding failures. These are logged
 * and reported to the caller as a bare 500 without detail.
 */

use thiserror::Error;
use axum::http::StatusCode;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{FormRejection, JsonRejection};
use crate::shared::SharedError;

/// Message returned to callers for every internal error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use authbox::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// assert_eq!(BackendError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token failed signature, audience, or expiry checks
    #[error("Invalid token")]
    InvalidToken,

    /// Username uniqueness violation
    #[error("Username already taken: {username}")]
    UsernameTaken {
        /// The rejected username
        username: String,
    },

    /// Token subject does not exist in the store
    #[error("User not found")]
    UserNotFound,

    /// Field validation failure
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Handler error (e.g., malformed body, missing multipart part)
    ///
    /// This error occurs when a request extractor rejects the input before
    /// any domain logic runs.
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token could not be signed
    #[error("Token encoding error: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),
}

/// Convenience alias used across the backend
pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials`, `InvalidToken` - 401 Unauthorized
    /// - `UsernameTaken` - 409 Conflict
    /// - `UserNotFound` - 404 Not Found
    /// - `Validation` - 422 Unprocessable Entity
    /// - `HandlerError` - Uses the status code from the error
    /// - Internal variants - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::UsernameTaken { .. } => StatusCode::CONFLICT,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::HandlerError { status, .. } => *status,
            Self::Database(_)
            | Self::Migration(_)
            | Self::PasswordHash(_)
            | Self::TokenEncoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the response must carry a `WWW-Authenticate` challenge
    pub fn is_auth_challenge(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::InvalidToken)
    }

    /// Whether this error hides an internal fault
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the caller-facing error message
    ///
    /// Internal variants never expose their source.
    pub fn message(&self) -> String {
        match self {
            Self::UsernameTaken { .. } => "Username already taken".to_string(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::Validation(err) => err.to_string(),
            _ if self.is_internal() => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for BackendError {
    fn from(rejection: FormRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for BackendError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for BackendError {
    fn from(err: MultipartError) -> Self {
        Self::handler(err.status(), err.body_text())
    }
}
