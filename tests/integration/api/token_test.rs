//! Token endpoint tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_test_user, TestApp};
use crate::assert_status;

#[tokio::test]
async fn test_token_for_valid_credentials() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "wonderland").await;

    let claims = app.state.tokens.verify_token(&alice.token).unwrap();
    assert_eq!(claims.sub, alice.id);
    assert_eq!(claims.exp - claims.iat, app.state.config.token_ttl_secs);
}

#[tokio::test]
async fn test_wrong_password_is_forbidden() {
    let app = TestApp::new();
    create_test_user(&app, "alice", "wonderland").await;

    let response = app
        .post("/api/token", json!({"username": "alice", "password": "nope"}))
        .await;
    assert_status!(response, StatusCode::FORBIDDEN);
    assert!(response.body.get("token").is_none());
}

#[tokio::test]
async fn test_unknown_user_matches_wrong_password() {
    let app = TestApp::new();
    create_test_user(&app, "alice", "wonderland").await;

    let unknown = app
        .post("/api/token", json!({"username": "mallory", "password": "wonderland"}))
        .await;
    let wrong = app
        .post("/api/token", json!({"username": "alice", "password": "nope"}))
        .await;

    assert_eq!(unknown.status, wrong.status);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_missing_fields_are_forbidden() {
    let app = TestApp::new();
    create_test_user(&app, "alice", "wonderland").await;

    let response = app.post("/api/token", json!({})).await;
    assert_status!(response, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_resolves_through_me() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "wonderland").await;

    let me = app
        .send(Method::GET, "/api/me", None, Some(&alice.token))
        .await;
    assert_status!(me, StatusCode::OK);
    assert_eq!(me.body["id"], alice.id.as_str());
    assert_eq!(me.body["username"], "alice");
    assert!(me.body.get("password").is_none());
}

#[tokio::test]
async fn test_me_without_token_is_null() {
    let app = TestApp::new();
    let me = app.get("/api/me").await;
    assert_status!(me, StatusCode::OK);
    assert_eq!(me.body, serde_json::Value::Null);
}
