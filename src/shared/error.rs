//! Shared Error Types
//!
//! This module defines the field-level validation error used when a request
//! is well-formed but carries values the server will not accept (a username
//! with illegal characters, an empty password, ...).
//!
//! # Usage
//!
//! ```rust
//! use authbox::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username must be 3-30 characters");
//! assert_eq!(error.field(), "username");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Validation errors raised before any store access
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
