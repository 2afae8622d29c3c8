//! Community and post API integration tests

use axum::http::StatusCode;
use carecircle::backend::moderation::BLOCKED_MESSAGE;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_error, assert_error_status, TestApp};

async fn first_community_id(app: &TestApp) -> String {
    let communities: Vec<Value> = app.server.get("/api/communities").await.json();
    communities[0]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_default_communities_are_seeded() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/api/communities").await;

    response.assert_status_ok();
    let communities: Vec<Value> = response.json();
    let names: Vec<&str> = communities
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "PTSD Recovery Room",
            "Chronic Pain Warriors",
            "Cancer Fighters",
            "General Wellness",
        ]
    );
    assert!(communities.iter().all(|c| c["is_private"] == true));
    assert!(communities.iter().all(|c| c["member_count"] == 0));
}

#[tokio::test]
async fn test_seeding_can_be_disabled() {
    let app = TestApp::spawn_with(|config| config.seed_communities = false).await;

    let communities: Vec<Value> = app.server.get("/api/communities").await.json();

    assert!(communities.is_empty());
}

#[tokio::test]
async fn test_create_community_requires_session() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/communities")
        .json(&json!({"name": "Night Owls", "description": "For insomnia", "category": "sleep"}))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Not authenticated");
}

#[tokio::test]
async fn test_create_community() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let me: Value = app.server.get("/api/auth/me").authorization_bearer(&token).await.json();

    let response = app
        .server
        .post("/api/communities")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Night Owls",
            "description": "Support for people living with insomnia",
            "category": "sleep"
        }))
        .await;

    response.assert_status_ok();
    let community: Value = response.json();
    assert_eq!(community["name"], "Night Owls");
    assert_eq!(community["created_by"], me["id"]);
    assert_eq!(community["moderators"], json!([me["id"]]));

    let communities: Vec<Value> = app.server.get("/api/communities").await.json();
    assert_eq!(communities.len(), 5);
    assert_eq!(communities[4]["id"], community["id"]);
}

#[tokio::test]
async fn test_create_community_is_screened() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .server
        .post("/api/communities")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Election Talk",
            "description": "Discuss the election",
            "category": "general-wellness"
        }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, BLOCKED_MESSAGE);
}

#[tokio::test]
async fn test_create_and_list_posts() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let community_id = first_community_id(&app).await;
    let url = format!("/api/communities/{}/posts", community_id);

    for title in ["First night back", "Small wins"] {
        let response = app
            .server
            .post(&url)
            .authorization_bearer(&token)
            .json(&json!({
                "title": title,
                "content": "Sharing how this week went.",
                "is_anonymous": true,
                "support_type": "milestone"
            }))
            .await;
        response.assert_status_ok();
        let post: Value = response.json();
        assert_eq!(post["community_id"], community_id.as_str());
        assert_eq!(post["is_anonymous"], true);
    }

    let posts: Vec<Value> = app.server.get(&url).await.json();
    let titles: Vec<&str> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["First night back", "Small wins"]);
}

#[tokio::test]
async fn test_post_with_banned_word_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let url = format!("/api/communities/{}/posts", first_community_id(&app).await);

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&token)
        .json(&json!({"title": "Rough day", "content": "This damn week"}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, BLOCKED_MESSAGE);

    let posts: Vec<Value> = app.server.get(&url).await.json();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_post_to_unknown_community() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let body = json!({"title": "Hello", "content": "Anyone here?"});

    let response = app
        .server
        .post(&format!("/api/communities/{}/posts", uuid::Uuid::new_v4()))
        .authorization_bearer(&token)
        .json(&body)
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "Community not found");

    let response = app
        .server
        .post("/api/communities/not-a-uuid/posts")
        .authorization_bearer(&token)
        .json(&body)
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "Community not found");
}

#[tokio::test]
async fn test_posts_for_unknown_community_are_empty() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/api/communities/not-a-uuid/posts").await;

    response.assert_status_ok();
    let posts: Vec<Value> = response.json();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_post_validation() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let url = format!("/api/communities/{}/posts", first_community_id(&app).await);

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&token)
        .json(&json!({"title": "   ", "content": "body"}))
        .await;
    assert_error_status(&response, StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post(&url)
        .authorization_bearer(&token)
        .json(&json!({"title": "Missing content"}))
        .await;
    assert_error_status(&response, StatusCode::BAD_REQUEST);
}
