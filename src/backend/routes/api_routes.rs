/**
 * API Routes
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - User registration
 * - `POST /token` - Bearer token for JSON credentials
 * - `POST /login` - Bearer token for form credentials
 * - `POST /forgot-password` - Start a password reset
 * - `POST /reset-password` - Finish a password reset
 *
 * ## Protected (bearer token)
 * - `GET /users/me` - Current user info
 * - `POST /files/` - File upload
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{forgot_password, get_me, login, login_form, register, reset_password};
use crate::backend::files::upload_file;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes are grouped in their own router so `auth_middleware`
/// applies to them alone. It is added with `route_layer`, so unmatched
/// paths fall through to the fallback instead of answering 401.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users/me", get(get_me))
        .route("/files/", post(upload_file))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/register", post(register))
        .route("/token", post(login))
        .route("/login", post(login_form))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        .merge(protected)
}
