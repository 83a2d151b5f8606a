/**
 * Authentication Service
 *
 * `AuthService` ties the user repository to password hashing and token
 * handling. Handlers and the auth middleware only ever talk to this type.
 *
 * # Operations
 *
 * - `register` - validate, hash, insert
 * - `authenticate` - verify a username/password pair
 * - `issue_token` / `resolve_token` - access token round trip
 * - `forgot_password` / `reset_password` - single-use reset flow
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (salted, configurable cost)
 * - An unknown username costs the same bcrypt verification as a wrong
 *   password, and both fail with `InvalidCredentials`
 * - Every token failure collapses into `InvalidToken`
 */

use crate::backend::auth::sessions::{password_fingerprint, AccessToken, SessionKeys};
use crate::backend::auth::users::{User, UserRepository};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::{ServerConfig, SharedError};

/// Longest password bcrypt hashes without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Authentication component shared by all handlers
#[derive(Clone, Debug)]
pub struct AuthService {
    users: UserRepository,
    keys: SessionKeys,
    bcrypt_cost: u32,
    dummy_hash: String,
}

impl AuthService {
    /// Create the service
    ///
    /// Hashes a throwaway password once so that lookups of unknown users
    /// still pay for a bcrypt verification.
    pub fn new(users: UserRepository, keys: SessionKeys, bcrypt_cost: u32) -> BackendResult<Self> {
        let dummy_hash = bcrypt::hash("authbox-timing-equalizer", bcrypt_cost)?;
        Ok(Self {
            users,
            keys,
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// Create the service from a pool and the server configuration
    pub fn from_config(pool: sqlx::SqlitePool, config: &ServerConfig) -> BackendResult<Self> {
        Self::new(
            UserRepository::new(pool),
            SessionKeys::from_config(config),
            config.bcrypt_cost,
        )
    }

    /// Register a new user
    ///
    /// # Errors
    /// * `Validation` - username or password rejected
    /// * `UsernameTaken` - username already registered
    pub async fn register(&self, username: &str, password: &str) -> BackendResult<User> {
        validate_username(username)?;
        validate_password(password)?;

        let password_hash = self.hash_password(password)?;
        let user = self.users.create(username, &password_hash).await?;

        tracing::info!("User created successfully: {} (id {})", user.username, user.id);
        Ok(user)
    }

    /// Verify a username/password pair
    ///
    /// # Errors
    /// `InvalidCredentials` for an unknown username and for a wrong password alike
    pub async fn authenticate(&self, username: &str, password: &str) -> BackendResult<User> {
        let user = self.users.find_by_username(username).await?;

        let Some(user) = user else {
            // Burn the same bcrypt work as a real check
            let _ = bcrypt::verify(password, &self.dummy_hash)?;
            tracing::warn!("Login failed for unknown user: {}", username);
            return Err(BackendError::InvalidCredentials);
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(BackendError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Issue an access token for a user
    pub fn issue_token(&self, user_id: i64) -> BackendResult<AccessToken> {
        let token = self
            .keys
            .create_token(user_id)
            .map_err(BackendError::TokenEncoding)?;
        Ok(AccessToken::bearer(token))
    }

    /// Resolve an access token to the user it was issued for
    ///
    /// # Errors
    /// * `InvalidToken` - signature, audience, expiry or subject check failed
    /// * `UserNotFound` - the subject no longer exists
    pub async fn resolve_token(&self, token: &str) -> BackendResult<User> {
        let claims = self.keys.verify_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::InvalidToken
        })?;

        let user_id = claims.user_id().ok_or_else(|| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            BackendError::InvalidToken
        })?;

        self.users.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("User not found: {}", user_id);
            BackendError::UserNotFound
        })
    }

    /// Start a password reset
    ///
    /// Returns a reset token when the user exists and `None` otherwise.
    /// Callers must answer both cases identically.
    pub async fn forgot_password(&self, username: &str) -> BackendResult<Option<String>> {
        let Some(user) = self.users.find_by_username(username).await? else {
            tracing::info!("Password reset requested for unknown user");
            return Ok(None);
        };

        let token = self
            .keys
            .create_reset_token(user.id, &user.password_hash)
            .map_err(BackendError::TokenEncoding)?;

        tracing::info!("Password reset token issued for user id {}", user.id);
        Ok(Some(token))
    }

    /// Complete a password reset
    ///
    /// # Errors
    /// * `InvalidToken` - bad token, unknown subject, or the password already changed
    /// * `Validation` - the new password is rejected
    pub async fn reset_password(&self, token: &str, new_password: &str) -> BackendResult<User> {
        let claims = self.keys.verify_reset_token(token).map_err(|e| {
            tracing::warn!("Invalid reset token: {:?}", e);
            BackendError::InvalidToken
        })?;

        let user_id = claims.user_id().ok_or(BackendError::InvalidToken)?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(BackendError::InvalidToken)?;

        if password_fingerprint(&user.password_hash) != claims.pfp {
            tracing::warn!("Stale reset token for user id {}", user.id);
            return Err(BackendError::InvalidToken);
        }

        validate_password(new_password)?;

        let password_hash = self.hash_password(new_password)?;
        let user = self
            .users
            .replace_password(user.id, &user.password_hash, &password_hash)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Reset token for user id {} was used concurrently", user.id);
                BackendError::InvalidToken
            })?;

        tracing::info!("Password reset for user id {}", user.id);
        Ok(user)
    }

    fn hash_password(&self, password: &str) -> BackendResult<String> {
        Ok(bcrypt::hash(password, self.bcrypt_cost)?)
    }
}

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn validate_username(username: &str) -> Result<(), SharedError> {
    if !is_valid_username(username) {
        tracing::warn!("Invalid username format: {}", username);
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.is_empty() {
        return Err(SharedError::validation("password", "Password must not be empty"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}
