/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the authentication service, which in turn owns the
 * user repository (and through it the connection pool) and the token keys.
 * None of it is mutable after startup; cloning the state clones handles.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers and middleware extract
 * `State<AuthService>` without needing the entire `AppState`.
 */

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Authentication service (user store, hashing, tokens)
    pub auth: AuthService,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

/// Implement FromRef for AuthService
///
/// This allows Axum handlers to extract `State<AuthService>` directly
/// from `AppState`.
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
