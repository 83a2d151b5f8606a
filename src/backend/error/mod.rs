//! Backend Error Module
//!
//! This module defines the error taxonomy of the backend server.
//! These errors are returned by services and handlers and are converted to
//! HTTP responses at the handler boundary.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `InvalidCredentials` / `InvalidToken` - 401 with a `WWW-Authenticate` challenge
//! - `UsernameTaken` - 409
//! - `UserNotFound` - 404
//! - `Validation` / `HandlerError` - 4xx for malformed or unacceptable input
//! - `Database`, `Migration`, `PasswordHash`, `TokenEncoding` - 500, no detail leaked

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, BackendResult};
