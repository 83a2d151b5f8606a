/**
 * User Model and Database Operations
 *
 * This module owns the `users` table. `UserRepository` is the adapter the
 * authentication service uses to read and write user records; it is the
 * only code that issues SQL.
 *
 * Each operation acquires one pooled connection for its own duration. The
 * `PoolConnection` guard returns the connection to the pool when it goes
 * out of scope, on success and on error alike.
 */

use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};

/// User record as stored in the database
///
/// This is the internal "full record" view. It is deliberately not
/// `Serialize`; outward-facing code converts it to `UserResponse`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// bcrypt hash of the password
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Read/write access to user records
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Wrap a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// # Arguments
    /// * `username` - User's chosen username
    /// * `password_hash` - Hashed password
    ///
    /// # Errors
    /// `UsernameTaken` when the unique constraint on `username` rejects the insert
    pub async fn create(&self, username: &str, password_hash: &str) -> BackendResult<User> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES (?, ?)
            RETURNING id, username, password
            "#
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                Err(BackendError::UsernameTaken {
                    username: username.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Get user by username
    ///
    /// # Returns
    /// User or None if not found
    pub async fn find_by_username(&self, username: &str) -> BackendResult<Option<User>> {
        let mut conn = self.pool.acquire().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password
            FROM users
            WHERE username = ?
            "#
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    ///
    /// # Returns
    /// User or None if not found
    pub async fn find_by_id(&self, id: i64) -> BackendResult<Option<User>> {
        let mut conn = self.pool.acquire().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password
            FROM users
            WHERE id = ?
            "#
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    /// Replace a user's password hash if it still equals `current_hash`
    ///
    /// The comparison and the write are one statement, so of two callers
    /// holding the same `current_hash` at most one succeeds. Returns `None`
    /// when no row matched (unknown ID or the hash already changed).
    pub async fn replace_password(
        &self,
        id: i64,
        current_hash: &str,
        new_hash: &str,
    ) -> BackendResult<Option<User>> {
        let mut conn = self.pool.acquire().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password = ?
            WHERE id = ? AND password = ?
            RETURNING id, username, password
            "#
        )
        .bind(new_hash)
        .bind(id)
        .bind(current_hash)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }
}
