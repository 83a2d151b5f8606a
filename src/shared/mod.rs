//! Shared Module
//!
//! This module contains types that are not tied to the HTTP layer: the
//! field-level validation error and the server configuration. Both are used
//! by the backend but can be constructed and tested without a running server
//! or a database.

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{ServerConfig, ServerConfigBuilder, ConfigError};
