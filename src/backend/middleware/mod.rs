//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Bearer-token middleware and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{middleware, routing::get, Router};
//! use authbox::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/users/me", get(get_me))
//!     .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{AuthenticatedUser, AuthUser, auth_middleware, bearer_token};
