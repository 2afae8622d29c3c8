//! AI companion integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{assert_error, assert_error_status, completion_body, TestApp};

const CHAT_URL: &str = "/api/ai/chat";
const UNAVAILABLE: &str = "AI companion temporarily unavailable";

#[tokio::test]
async fn test_companion_requires_session() {
    let app = TestApp::spawn().await;

    let response = app.server.post(CHAT_URL).json(&json!({"message": "hello"})).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Not authenticated");
}

#[tokio::test]
async fn test_companion_reply() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("I can't sleep again"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("That sounds exhausting. What usually helps?")),
        )
        .expect(1)
        .mount(&app.llm)
        .await;

    let response = app
        .server
        .post(CHAT_URL)
        .authorization_bearer(&token)
        .json(&json!({"message": "I can't sleep again"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["response"], "That sounds exhausting. What usually helps?");
    assert_eq!(body["is_panic_response"], false);
}

#[tokio::test]
async fn test_panic_mode_is_flagged() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    app.mock_completion("I'm right here with you.").await;

    let response = app
        .server
        .post(CHAT_URL)
        .authorization_bearer(&token)
        .json(&json!({"message": "I'm panicking", "is_panic": true}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_panic_response"], true);
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.llm)
        .await;

    let response = app
        .server
        .post(CHAT_URL)
        .authorization_bearer(&token)
        .json(&json!({"message": "hello"}))
        .await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE);
}

#[tokio::test]
async fn test_missing_api_key_is_500() {
    let app = TestApp::spawn_with(|config| config.llm.api_key = None).await;
    let token = app.login().await;

    let response = app
        .server
        .post(CHAT_URL)
        .authorization_bearer(&token)
        .json(&json!({"message": "hello"}))
        .await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE);
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .server
        .post(CHAT_URL)
        .authorization_bearer(&token)
        .json(&json!({"message": "  "}))
        .await;

    assert_error_status(&response, StatusCode::BAD_REQUEST);
}
