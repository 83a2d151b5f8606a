//! Authentication Module
//!
//! This module handles user registration, credential checks, bearer tokens,
//! and password resets.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User record and the repository over the `users` table
//! - **`sessions`** - JWT signing and verification
//! - **`service`** - `AuthService`, the operations handlers call
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Authentication service
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication; there is no revocation
//! - Access tokens expire after the configured lifetime (one hour by default)
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{CredentialsRequest, ForgotPasswordRequest, ResetPasswordRequest, UserResponse};
pub use handlers::{forgot_password, get_me, login, login_form, register, reset_password};
pub use service::AuthService;
pub use sessions::{AccessToken, SessionKeys};
pub use users::{User, UserRepository};
