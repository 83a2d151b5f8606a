//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs            - Module exports and documentation
//! ├── types.rs          - Request and response types
//! ├── register.rs       - User registration handler
//! ├── login.rs          - Token handlers (JSON and form)
//! ├── me.rs             - Get current user handler
//! └── reset_password.rs - Forgot/reset password handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /token - Token for JSON credentials
//! - **`login_form`** - POST /login - Token for form credentials
//! - **`get_me`** - GET /users/me - Current user info
//! - **`forgot_password`** - POST /forgot-password - Issue a reset token
//! - **`reset_password`** - POST /reset-password - Set a new password
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → user created → `{id, username}` returned
//! 2. **Token**: username and password → credentials verified → bearer token returned
//! 3. **Me**: bearer token → token verified → `{id, username}` returned
//!
//! # Example
//!
//! ```rust,ignore
//! use authbox::backend::auth::handlers::{register, login, get_me};
//! use axum::{routing::{get, post}, Router};
//!
//! let router = Router::new()
//!     .route("/register", post(register))
//!     .route("/token", post(login))
//!     .route("/users/me", get(get_me));
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handlers
pub mod login;

/// Get current user handler
pub mod me;

/// Password reset handlers
pub mod reset_password;

// Re-export commonly used types
pub use types::{CredentialsRequest, ForgotPasswordRequest, ResetPasswordRequest, UserResponse};

// Re-export handlers
pub use register::register;
pub use login::{login, login_form};
pub use me::get_me;
pub use reset_password::{forgot_password, reset_password};
