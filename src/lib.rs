//! authbox - Main Library
//!
//! authbox is a small authentication backend built on Axum, SQLite (sqlx),
//! bcrypt, and JSON Web Tokens.
//!
//! # Overview
//!
//! - User registration with unique usernames
//! - Password login issuing bearer tokens
//! - `GET /users/me` for the token's user
//! - Authenticated multipart upload that echoes the filename
//! - Password reset via single-use reset tokens
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and validation error types
//! - **`backend`** - Axum server, handlers, persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use authbox::backend::server::init::create_app;
//! use authbox::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder()
//!     .database_url("sqlite::memory:")
//!     .jwt_secret("change-me")
//!     .build()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
