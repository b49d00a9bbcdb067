// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse Contributors

//! End-to-end tests driving the real router through `tower::ServiceExt`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use gatehouse_server::{
    api::router,
    auth::{Role, RoutePolicy, TokenCodec},
    state::AppState,
    store::UserStore,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const SECRET: &str = "integration-test-secret-key-0123456789abcdef";
const DAY_MS: i64 = 86_400_000;

// Minimum bcrypt cost, for test speed only.
const TEST_COST: u32 = 4;

fn test_codec() -> TokenCodec {
    TokenCodec::new(SECRET, DAY_MS)
}

fn build_app() -> Router {
    let mut store = UserStore::new();
    store
        .seed_defaults_with_cost(TEST_COST)
        .expect("seed users");
    router(AppState::new(
        store,
        test_codec(),
        RoutePolicy::standard(),
        false,
    ))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> Value {
    let (status, body) = send(
        app,
        post_json(
            "/api/public/auth/login",
            &json!({"username": username, "password": password}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login should succeed: {body}");
    body
}

#[tokio::test]
async fn public_health_endpoint_requires_no_auth() {
    let app = build_app();
    let (status, body) = send(&app, get("/api/public/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
    assert_eq!(body["message"], "Application is running");
}

#[tokio::test]
async fn successful_login_returns_token_and_identity() {
    let app = build_app();
    let body = login(&app, "user", "user123").await;

    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["username"], "user");
    assert_eq!(body["roles"][0], "ROLE_USER");
    assert_eq!(body["expiresIn"], DAY_MS);

    // The token verifies against the same key, bound to the username.
    let claims = test_codec()
        .verify(body["token"].as_str().unwrap(), Some("user"))
        .expect("token verifies");
    assert_eq!(claims.uid, body["userId"].as_str().unwrap());
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = build_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/public/auth/login",
            &json!({"username": "user", "password": "wrongpassword"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["path"], "/api/public/auth/login");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn login_failures_are_enumeration_safe() {
    let app = build_app();

    let (wrong_status, wrong_body) = send(
        &app,
        post_json(
            "/api/public/auth/login",
            &json!({"username": "user", "password": "wrongpassword"}),
        ),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        post_json(
            "/api/public/auth/login",
            &json!({"username": "no-such-user", "password": "user123"}),
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    // Identical shape apart from the timestamp.
    for field in ["status", "error", "message", "path"] {
        assert_eq!(wrong_body[field], unknown_body[field], "field {field}");
    }
}

#[tokio::test]
async fn protected_endpoint_without_token_is_401() {
    let app = build_app();
    let (status, body) = send(&app, get("/api/user/me")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["path"], "/api/user/me");
}

#[tokio::test]
async fn protected_endpoint_with_valid_token_returns_identity() {
    let app = build_app();
    let login_body = login(&app, "user", "user123").await;
    let token = login_body["token"].as_str().unwrap();

    let (status, body) = send(&app, get_with_token("/api/user/me", token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "user");
    assert_eq!(body["role"], "ROLE_USER");
    assert_eq!(body["userId"], login_body["userId"]);
}

#[tokio::test]
async fn admin_endpoint_with_regular_user_is_403() {
    let app = build_app();
    let login_body = login(&app, "user", "user123").await;
    let token = login_body["token"].as_str().unwrap();

    let (status, body) = send(&app, get_with_token("/api/admin/users", token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], 403);
    assert_eq!(body["error"], "Forbidden");
    assert_eq!(body["path"], "/api/admin/users");
}

#[tokio::test]
async fn admin_endpoint_with_admin_user_lists_users() {
    let app = build_app();
    let login_body = login(&app, "admin", "admin123").await;
    assert_eq!(login_body["roles"][0], "ROLE_ADMIN");
    let token = login_body["token"].as_str().unwrap();

    let (status, body) = send(&app, get_with_token("/api/admin/users", token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let users = body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 2);
    // Sorted by username: admin first.
    assert_eq!(users[0]["username"], "admin");
    assert_eq!(users[0]["role"], "ROLE_ADMIN");
    assert_eq!(users[1]["username"], "user");
    // Hashes never leave the server.
    assert!(users[0].get("password_hash").is_none());
}

#[tokio::test]
async fn admin_endpoint_without_token_is_401_not_403() {
    let app = build_app();
    let (status, body) = send(&app, get("/api/admin/users")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn public_route_ignores_malformed_tokens() {
    let app = build_app();
    let (status, body) = send(
        &app,
        get_with_token("/api/public/health", "not-even-close-to-a-token"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn tampered_signature_is_treated_as_unauthenticated() {
    let app = build_app();
    let login_body = login(&app, "user", "user123").await;
    let mut token = login_body["token"].as_str().unwrap().to_string();

    let last = token.pop().unwrap();
    token.push(if last == 'A' { 'B' } else { 'A' });

    let (status, _body) = send(&app, get_with_token("/api/user/me", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_treated_as_unauthenticated() {
    let app = build_app();

    // Same key as the server, issued two days ago with a one-day lifetime.
    let issued = test_codec()
        .issue(
            "uid-expired",
            "user",
            &[Role::User],
            Utc::now() - chrono::Duration::days(2),
        )
        .expect("issue");

    let (status, _body) = send(&app, get_with_token("/api/user/me", &issued.token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_a_different_key_is_rejected() {
    let app = build_app();

    let foreign = TokenCodec::new("some-other-service-key-0123456789abc", DAY_MS)
        .issue("uid-1", "user", &[Role::User], Utc::now())
        .expect("issue");

    let (status, _body) = send(&app, get_with_token("/api/user/me", &foreign.token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
