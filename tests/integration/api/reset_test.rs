//! Password reset integration tests
//!
//! The reset token never travels over HTTP, so the tests mint it through
//! the `AuthService` that shares the server's database.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::assertions::{assert_error_response, assert_unauthorized};
use crate::common::{create_test_app, create_test_user, TestApp};

async fn reset_token_for(app: &TestApp, username: &str) -> String {
    let token = app.auth.forgot_password(username).await.unwrap();
    assert_matches!(token, Some(_));
    token.unwrap()
}

#[tokio::test]
async fn test_forgot_password_is_silent_about_accounts() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;

    let known = app
        .server
        .post("/forgot-password")
        .json(&json!({ "username": "alice" }))
        .await;
    let unknown = app
        .server
        .post("/forgot-password")
        .json(&json!({ "username": "nobody" }))
        .await;

    assert_eq!(known.status_code(), StatusCode::ACCEPTED);
    assert_eq!(unknown.status_code(), StatusCode::ACCEPTED);
    assert_eq!(known.json::<Value>(), json!({}));
    assert_eq!(unknown.json::<Value>(), json!({}));
}

#[tokio::test]
async fn test_reset_password_flow() {
    let app = create_test_app().await;
    let user = create_test_user(&app.server, "alice", "pw1").await;
    let token = reset_token_for(&app, "alice").await;

    let response = app
        .server
        .post("/reset-password")
        .json(&json!({ "token": token, "password": "pw2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": user.id, "username": "alice" })
    );

    let old = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;
    assert_unauthorized(&old);

    let new = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice", "password": "pw2" }))
        .await;
    assert_eq!(new.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_reset_token_is_single_use() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;
    let token = reset_token_for(&app, "alice").await;

    let first = app
        .server
        .post("/reset-password")
        .json(&json!({ "token": token, "password": "pw2" }))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = app
        .server
        .post("/reset-password")
        .json(&json!({ "token": token, "password": "pw3" }))
        .await;
    assert_unauthorized(&second);
}

#[tokio::test]
async fn test_access_token_cannot_reset_password() {
    let app = create_test_app().await;
    let user = create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .post("/reset-password")
        .json(&json!({ "token": user.token, "password": "pw2" }))
        .await;
    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_reset_token_is_not_a_bearer_token() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;
    let token = reset_token_for(&app, "alice").await;

    let response = app
        .server
        .get("/users/me")
        .authorization_bearer(&token)
        .await;
    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_reset_rejects_empty_password() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;
    let token = reset_token_for(&app, "alice").await;

    let response = app
        .server
        .post("/reset-password")
        .json(&json!({ "token": token, "password": "" }))
        .await;
    assert_error_response(&response, StatusCode::UNPROCESSABLE_ENTITY);

    // The token was not consumed by the failed attempt.
    let response = app
        .server
        .post("/reset-password")
        .json(&json!({ "token": token, "password": "pw2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
