//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallback, tracing
//! └── api_routes.rs   - Public and protected API routes
//! ```
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/register` | none |
//! | POST | `/token` | none |
//! | POST | `/login` | none |
//! | POST | `/forgot-password` | none |
//! | POST | `/reset-password` | none |
//! | GET | `/users/me` | bearer |
//! | POST | `/files/` | bearer |

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
