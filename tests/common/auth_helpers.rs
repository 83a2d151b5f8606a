//! Authentication test helpers
//!
//! Provides utilities for creating test users and tokens through the HTTP
//! surface.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Register a user and log in, returning its credentials and token
pub async fn create_test_user(server: &TestServer, username: &str, password: &str) -> TestUser {
    let response = server
        .post("/register")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["id"].as_i64().expect("id is an integer");

    let token = login(server, username, password).await;

    TestUser {
        id,
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Log in through `POST /token` and return the access token
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["access_token"]
        .as_str()
        .expect("access_token is a string")
        .to_string()
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
