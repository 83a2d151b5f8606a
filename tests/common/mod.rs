//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - Test server fixtures over an in-memory database
//! - Authentication helpers (register, token)
//! - Custom assertion macros

#![allow(dead_code)]

pub mod auth_helpers;
pub mod server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use server::*;
