/**
 * Database Loading
 *
 * This module opens the SQLite connection pool described by
 * `ServerConfig::database_url` and brings the schema up to date.
 *
 * # Migrations
 *
 * Migrations under `migrations/` are embedded at compile time with
 * `sqlx::migrate!()` and run on every start. Already-applied migrations are
 * skipped, so startup against an existing database is a no-op.
 *
 * # In-Memory Databases
 *
 * An in-memory SQLite database exists per connection. For `:memory:` URLs
 * the pool is pinned to a single connection that never idles out, so the
 * database lives exactly as long as the pool.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::BackendResult;
use crate::shared::ServerConfig;

/// Open the pool for `config.database_url` and run migrations
///
/// # Errors
///
/// Returns `Database` if the URL is invalid or the database cannot be
/// opened, `Migration` if the schema cannot be applied.
pub async fn load_database(config: &ServerConfig) -> BackendResult<SqlitePool> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true);

    let pool = if is_in_memory(&config.database_url) {
        single_connection_pool(options).await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Open a fresh, migrated in-memory database
///
/// Every call returns an independent database.
pub async fn connect_in_memory() -> BackendResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = single_connection_pool(options).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> BackendResult<()> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

async fn single_connection_pool(options: SqliteConnectOptions) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
