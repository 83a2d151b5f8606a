//! Database integration tests
//!
//! File-backed databases in a temporary directory, exercising startup
//! against an existing schema.

use authbox::backend::auth::UserRepository;
use authbox::backend::server::config::load_database;
use authbox::backend::server::create_app;
use authbox::shared::ServerConfig;
use pretty_assertions::assert_eq;

fn file_config(dir: &tempfile::TempDir) -> ServerConfig {
    let path = dir.path().join("authbox.db");
    ServerConfig::builder()
        .database_url(format!("sqlite://{}", path.display()))
        .jwt_secret("database-test-secret")
        .bcrypt_cost(4)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_app_starts_twice_on_same_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    create_app(&config).await.unwrap();
    create_app(&config).await.unwrap();
}

#[tokio::test]
async fn test_users_persist_across_pools() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let pool = load_database(&config).await.unwrap();
    let created = UserRepository::new(pool.clone())
        .create("alice", "$2b$04$hash")
        .await
        .unwrap();
    pool.close().await;

    let pool = load_database(&config).await.unwrap();
    let found = UserRepository::new(pool)
        .find_by_username("alice")
        .await
        .unwrap();
    assert_eq!(found, Some(created));
}
