//! Backend Module
//!
//! This module contains all server-side code for authbox: an Axum HTTP
//! server with user registration, bearer-token login, an identity endpoint,
//! an authenticated upload endpoint, and password resets.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, JWT tokens, `AuthService`, auth handlers
//! - **`files`** - Upload handler
//! - **`middleware`** - Bearer-token middleware and extractor
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── files/          - File upload
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the `AuthService`, which owns the SQLite pool and the
//! token signing keys. Nothing in it is mutated after startup, so handlers
//! share it by cloning handles and need no locks.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` implements
//! `IntoResponse` and renders `{"error": ..., "status": ...}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use authbox::backend::server::create_app;
//! use authbox::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// File upload
pub mod files;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::{BackendError, BackendResult};
