//! Test server fixtures
//!
//! Every `TestApp` owns a fresh in-memory SQLite database, so tests never
//! see each other's users.

use authbox::backend::auth::AuthService;
use authbox::backend::server::config::connect_in_memory;
use authbox::backend::server::create_app_with_pool;
use authbox::shared::ServerConfig;
use axum_test::TestServer;

/// Secret shared by the server and the test-side `AuthService`
pub const TEST_SECRET: &str = "integration-test-secret";

/// Cheapest bcrypt cost accepted by the configuration
pub const TEST_BCRYPT_COST: u32 = 4;

/// Running app plus a service over the same database
///
/// `auth` lets tests reach operations that have no HTTP output, such as
/// the reset token minted by `forgot_password`.
pub struct TestApp {
    pub server: TestServer,
    pub auth: AuthService,
}

/// Configuration used by every test server
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(TEST_BCRYPT_COST)
        .build()
        .expect("test configuration is valid")
}

/// Create a test server over a fresh in-memory database
pub async fn create_test_app() -> TestApp {
    let config = test_config();
    let pool = connect_in_memory().await.expect("in-memory database");
    let auth = AuthService::from_config(pool.clone(), &config).expect("auth service");
    let app = create_app_with_pool(pool, &config).expect("app");

    TestApp {
        server: TestServer::new(app).expect("test server"),
        auth,
    }
}
