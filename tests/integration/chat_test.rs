//! Live chat integration tests
//!
//! REST polling and websocket clients share one room per community id.

use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestWebSocket;
use carecircle::backend::moderation::BLOCKED_MESSAGE;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_error, assert_error_status, TestApp};

async fn send(app: &TestApp, room: &str, body: Value) -> Value {
    let response = app
        .server
        .post(&format!("/api/chat/{}/send", room))
        .json(&body)
        .await;
    response.assert_status_ok();
    response.json()
}

async fn history(app: &TestApp, room: &str, query: &str) -> Vec<Value> {
    let response = app
        .server
        .get(&format!("/api/chat/{}/messages{}", room, query))
        .await;
    response.assert_status_ok();
    response.json()
}

async fn connect(app: &TestApp, room: &str) -> TestWebSocket {
    let socket = app
        .server
        .get_websocket(&format!("/ws/chat/{}", room))
        .await
        .into_websocket()
        .await;
    // The room subscription is taken after the upgrade completes
    tokio::time::sleep(Duration::from_millis(100)).await;
    socket
}

#[tokio::test]
async fn test_send_then_list() {
    let app = TestApp::spawn().await;

    let sent = send(&app, "general", json!({"message": "Hello circle"})).await;
    assert_eq!(sent["status"], "sent");
    assert!(sent["message_id"].is_string());

    send(
        &app,
        "general",
        json!({"message": "Hi back", "user_name": "Sam", "is_anonymous": false}),
    )
    .await;

    let messages = history(&app, "general", "").await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["id"], sent["message_id"]);
    assert_eq!(messages[0]["message"], "Hello circle");
    assert_eq!(messages[0]["user_name"], "Anonymous");
    assert_eq!(messages[1]["message"], "Hi back");
    assert_eq!(messages[1]["user_name"], "Sam");
}

#[tokio::test]
async fn test_rooms_are_separate() {
    let app = TestApp::spawn().await;

    send(&app, "ptsd", json!({"message": "in ptsd"})).await;

    assert!(history(&app, "chronic-pain", "").await.is_empty());
    assert_eq!(history(&app, "ptsd", "").await.len(), 1);
}

#[tokio::test]
async fn test_history_limit() {
    let app = TestApp::spawn().await;
    for text in ["one", "two", "three"] {
        send(&app, "general", json!({"message": text})).await;
    }

    let latest: Vec<String> = history(&app, "general", "?limit=2")
        .await
        .iter()
        .map(|m| m["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(latest, vec!["two", "three"]);

    assert_eq!(history(&app, "general", "?limit=0").await.len(), 1);
    assert_eq!(history(&app, "general", "?limit=100000").await.len(), 3);

    let response = app.server.get("/api/chat/general/messages?limit=abc").await;
    assert_error_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filtered_message_is_rejected_and_not_stored() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/chat/general/send")
        .json(&json!({"message": "what about the election"}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, BLOCKED_MESSAGE);
    assert!(history(&app, "general", "").await.is_empty());
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/chat/general/send")
        .json(&json!({"message": "   "}))
        .await;

    assert_error_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_websocket_broadcasts_to_room() {
    let app = TestApp::spawn().await;
    let mut author = connect(&app, "general").await;
    let mut listener = connect(&app, "general").await;

    author
        .send_json(&json!({"message": "Is anyone up?", "user_name": "Robin", "is_anonymous": false}))
        .await;

    for socket in [&mut author, &mut listener] {
        let event: Value = socket.receive_json().await;
        assert_eq!(event["type"], "message");
        assert_eq!(event["message"], "Is anyone up?");
        assert_eq!(event["user_name"], "Robin");
        assert_eq!(event["community_id"], "general");
    }

    let stored = history(&app, "general", "").await;
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_rest_send_reaches_websocket() {
    let app = TestApp::spawn().await;
    let mut listener = connect(&app, "cancer").await;

    let sent = send(&app, "cancer", json!({"message": "Scan came back clear"})).await;

    let event: Value = listener.receive_json().await;
    assert_eq!(event["type"], "message");
    assert_eq!(event["id"], sent["message_id"]);
}

#[tokio::test]
async fn test_websocket_warning_goes_to_author_only() {
    let app = TestApp::spawn().await;
    let mut author = connect(&app, "general").await;
    let mut listener = connect(&app, "general").await;

    author.send_json(&json!({"message": "this is shit"})).await;

    let warning: Value = author.receive_json().await;
    assert_eq!(warning["type"], "warning");
    assert_eq!(warning["message"], BLOCKED_MESSAGE);

    // The next thing the listener sees is the following good message
    author.send_json(&json!({"message": "sorry, rough night"})).await;
    let event: Value = listener.receive_json().await;
    assert_eq!(event["type"], "message");
    assert_eq!(event["message"], "sorry, rough night");

    assert_eq!(history(&app, "general", "").await.len(), 1);
}

#[tokio::test]
async fn test_websocket_bad_frames_get_errors() {
    let app = TestApp::spawn().await;
    let mut socket = connect(&app, "general").await;

    socket.send_text("definitely not json").await;
    let error: Value = socket.receive_json().await;
    assert_eq!(error["type"], "error");
    assert_eq!(error["message"], "Invalid message format");

    socket.send_json(&json!({"message": ""})).await;
    let error: Value = socket.receive_json().await;
    assert_eq!(error["type"], "error");

    // The connection survives bad frames
    socket.send_json(&json!({"message": "still here"})).await;
    let event: Value = socket.receive_json().await;
    assert_eq!(event["type"], "message");
}
