//! Authentication API integration tests
//!
//! Session exchange with the identity provider, `/me`, and logout.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::assert_contains;
use crate::common::{assert_error, TestApp, SESSION_DATA_PATH};

#[tokio::test]
async fn test_session_requires_header() {
    let app = TestApp::spawn().await;

    let response = app.server.post("/api/auth/session").await;

    assert_error(&response, StatusCode::BAD_REQUEST, "X-Session-ID header required");
}

#[tokio::test]
async fn test_session_rejected_by_provider() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path(SESSION_DATA_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.identity)
        .await;

    let response = app
        .server
        .post("/api/auth/session")
        .add_header(
            HeaderName::from_static("x-session-id"),
            HeaderValue::from_static("bogus"),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Invalid session ID");
}

#[tokio::test]
async fn test_session_creates_user_and_sets_cookie() {
    let app = TestApp::spawn().await;
    app.mock_identity("sid-1", "river@example.com", "River").await;

    let response = app
        .server
        .post("/api/auth/session")
        .add_header(
            HeaderName::from_static("x-session-id"),
            HeaderValue::from_static("sid-1"),
        )
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["email"], "river@example.com");
    assert_eq!(body["name"], "River");
    assert_eq!(body["picture"], "https://example.com/avatar.png");

    let token = body["session_token"].as_str().unwrap();
    assert!(token.starts_with("st_"));

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("session_token={};", token)));
    assert_contains!(set_cookie, "HttpOnly");
    assert_contains!(set_cookie, "Max-Age=604800");
}

#[tokio::test]
async fn test_repeat_login_reuses_user() {
    let app = TestApp::spawn().await;

    let first = app.create_session("sid-a", "sky@example.com", "Sky").await;
    let second = app.create_session("sid-b", "sky@example.com", "Sky").await;

    assert_eq!(first["id"], second["id"]);
    assert_ne!(first["session_token"], second["session_token"]);
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/api/auth/me").await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Not authenticated");

    let response = app
        .server
        .get("/api/auth/me")
        .authorization_bearer("st_not-a-real-token")
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Not authenticated");
}

#[tokio::test]
async fn test_me_returns_profile() {
    let app = TestApp::spawn().await;
    let body = app.create_session("sid-me", "ash@example.com", "Ash").await;
    let token = body["session_token"].as_str().unwrap();

    let response = app.server.get("/api/auth/me").authorization_bearer(token).await;

    response.assert_status_ok();
    let profile: Value = response.json();
    assert_eq!(profile["id"], body["id"]);
    assert_eq!(profile["email"], "ash@example.com");
    assert_eq!(profile["privacy_level"], "private");
    assert_eq!(profile["health_conditions"], serde_json::json!([]));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .server
        .post("/api/auth/logout")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Logged out successfully");

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("session_token=;"));
    assert_contains!(set_cookie, "Max-Age=0");

    let response = app.server.get("/api/auth/me").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_still_succeeds() {
    let app = TestApp::spawn().await;

    let response = app.server.post("/api/auth/logout").await;

    response.assert_status_ok();
}
