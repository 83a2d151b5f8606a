//! Authentication API integration tests
//!
//! Tests for registration, the token endpoints, `/users/me`, and the
//! router fallback.

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::assertions::{assert_error_response, assert_unauthorized};
use crate::common::{create_test_app, create_test_user, login};

#[tokio::test]
async fn test_register_then_duplicate() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["username"], "alice");
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "other" }))
        .await;
    assert_error_response(&response, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_invalid_username() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "1bad name", "password": "pw1" }))
        .await;
    assert_error_response(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_token_success() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["token_type"], "bearer");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_form_success() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .post("/login")
        .form(&[("username", "alice"), ("password", "pw1")])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["token_type"], "bearer");
}

#[tokio::test]
async fn test_bad_credentials_are_indistinguishable() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;

    let wrong_password = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice", "password": "nope" }))
        .await;
    let unknown_user = app
        .server
        .post("/token")
        .json(&json!({ "username": "mallory", "password": "pw1" }))
        .await;

    let first = assert_unauthorized(&wrong_password);
    let second = assert_unauthorized(&unknown_user);
    assert_eq!(first, second);
    assert_eq!(wrong_password.json::<Value>(), unknown_user.json::<Value>());
}

#[tokio::test]
async fn test_token_malformed_body() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice" }))
        .await;
    assert!(response.status_code().is_client_error());
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_me_returns_exactly_id_and_username() {
    let app = create_test_app().await;
    let user = create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .get("/users/me")
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": user.id, "username": "alice" })
    );
}

#[tokio::test]
async fn test_me_without_token() {
    let app = create_test_app().await;

    let response = app.server.get("/users/me").await;
    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/users/me")
        .authorization_bearer("not-a-token")
        .await;
    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_me_with_tampered_signature() {
    let app = create_test_app().await;
    let user = create_test_user(&app.server, "alice", "pw1").await;

    let (signed, signature) = user.token.rsplit_once('.').unwrap();
    let first = if signature.starts_with('A') { 'B' } else { 'A' };
    let tampered = format!("{}.{}{}", signed, first, &signature[1..]);

    let response = app
        .server
        .get("/users/me")
        .authorization_bearer(&tampered)
        .await;
    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_me_accepts_lowercase_scheme() {
    let app = create_test_app().await;
    let user = create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .get("/users/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("bearer {}", user.token)).unwrap(),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_each_login_issues_usable_token() {
    let app = create_test_app().await;
    create_test_user(&app.server, "alice", "pw1").await;
    let token = login(&app.server, "alice", "pw1").await;

    // A second login yields another valid token for the same user.
    let again = login(&app.server, "alice", "pw1").await;
    for token in [token, again] {
        let response = app
            .server
            .get("/users/me")
            .authorization_bearer(&token)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = create_test_app().await;

    let response = app.server.get("/nope").await;
    let message = assert_error_response(&response, StatusCode::NOT_FOUND);
    assert_eq!(message, "Not found");
}
