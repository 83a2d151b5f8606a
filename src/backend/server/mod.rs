//! Server Module
//!
//! This module contains the code that assembles the running server: the
//! database pool, the shared application state, and the router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool loading and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Database**: open the pool for `DATABASE_URL`, run migrations
//! 2. **Services**: build `AuthService` from the pool and `ServerConfig`
//! 3. **Router**: configure routes, auth middleware, and tracing

/// Application state management
pub mod state;

/// Database loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, create_app_with_pool};
