/**
 * authbox Server Entry Point
 *
 * This is the main entry point for the authbox backend server.
 * It loads configuration from the environment and serves the Axum app.
 */

use authbox::backend::server::init::create_app;
use authbox::shared::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr()?;

    // Create the Axum app
    let app = create_app(&config).await?;

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
