/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across the register, login, me and reset handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Credentials request
///
/// Body of `POST /register`, `POST /token` (JSON) and `POST /login` (form).
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    /// Username
    pub username: String,
    /// Plaintext password (hashed before storage, never logged)
    pub password: String,
}

/// Forgot password request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ForgotPasswordRequest {
    /// Username of the account to reset
    pub username: String,
}

/// Reset password request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResetPasswordRequest {
    /// Reset token obtained from the forgot-password flow
    pub token: String,
    /// New plaintext password
    pub password: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's username
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
