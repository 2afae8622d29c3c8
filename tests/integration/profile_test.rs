//! Profile API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_error, assert_error_status, TestApp};

#[tokio::test]
async fn test_profile_requires_session() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/api/profile").await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Not authenticated");

    let response = app.server.patch("/api/profile").json(&json!({"bio": "hi"})).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Not authenticated");
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let before: Value = app.server.get("/api/profile").authorization_bearer(&token).await.json();

    let response = app
        .server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({
            "display_name": "Quiet Harbor",
            "bio": "One day at a time.",
            "health_conditions": ["ptsd", "insomnia"],
            "privacy_level": "community"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Profile updated successfully");

    let after: Value = app.server.get("/api/profile").authorization_bearer(&token).await.json();
    assert_eq!(after["display_name"], "Quiet Harbor");
    assert_eq!(after["bio"], "One day at a time.");
    assert_eq!(after["health_conditions"], json!(["ptsd", "insomnia"]));
    assert_eq!(after["privacy_level"], "community");
    assert_eq!(after["email"], before["email"]);
    assert_eq!(after["avatar_url"], Value::Null);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    app.server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({"display_name": "Harbor", "bio": "first"}))
        .await
        .assert_status_ok();
    app.server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({"bio": "second"}))
        .await
        .assert_status_ok();

    let profile: Value = app.server.get("/api/profile").authorization_bearer(&token).await.json();
    assert_eq!(profile["display_name"], "Harbor");
    assert_eq!(profile["bio"], "second");
}

#[tokio::test]
async fn test_protected_fields_are_ignored() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let before: Value = app.server.get("/api/profile").authorization_bearer(&token).await.json();

    app.server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({"email": "attacker@example.com", "id": "someone-else", "bio": "ok"}))
        .await
        .assert_status_ok();

    let after: Value = app.server.get("/api/profile").authorization_bearer(&token).await.json();
    assert_eq!(after["email"], before["email"]);
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["bio"], "ok");
}

#[tokio::test]
async fn test_invalid_privacy_level() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({"privacy_level": "everyone"}))
        .await;

    assert_error_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_null_clears_profile_fields() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    app.server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({"bio": "old bio", "avatar_url": "https://img/old.png"}))
        .await
        .assert_status_ok();
    app.server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({"bio": null, "avatar_url": null}))
        .await
        .assert_status_ok();

    let profile: Value = app.server.get("/api/profile").authorization_bearer(&token).await.json();
    assert_eq!(profile["bio"], Value::Null);
    assert_eq!(profile["avatar_url"], Value::Null);
    assert_ne!(profile["display_name"], Value::Null);
}

#[tokio::test]
async fn test_empty_update_changes_nothing() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    app.server
        .patch("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({"bio": "steady"}))
        .await
        .assert_status_ok();

    for body in [json!({}), json!({"email": "other@example.com"})] {
        let response = app
            .server
            .patch("/api/profile")
            .authorization_bearer(&token)
            .json(&body)
            .await;
        response.assert_status_ok();
        let message: Value = response.json();
        assert_eq!(message["message"], "Profile updated successfully");
    }

    let profile: Value = app.server.get("/api/profile").authorization_bearer(&token).await.json();
    assert_eq!(profile["bio"], "steady");
}
