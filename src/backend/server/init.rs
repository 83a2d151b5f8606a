/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Build the authentication service from the pool and configuration
 * 3. Create the router with all routes and middleware
 *
 * Any failure aborts startup; the server has no useful mode without its
 * user store.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Propagates database, migration, and password-hashing failures from
/// setup.
pub async fn create_app(config: &ServerConfig) -> BackendResult<Router<()>> {
    tracing::info!("Initializing authbox backend server");

    let db_pool = load_database(config).await?;
    create_app_with_pool(db_pool, config)
}

/// Create the application over an already-migrated pool
///
/// Lets callers that own the pool (tests, embedding applications) share it
/// with the server.
pub fn create_app_with_pool(db_pool: SqlitePool, config: &ServerConfig) -> BackendResult<Router<()>> {
    let auth = AuthService::from_config(db_pool, config)?;
    let app_state = AppState::new(auth);

    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
