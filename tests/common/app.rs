//! Test application helpers
//!
//! `TestApp` owns the server under test plus the two wiremock servers it
//! talks to. The server runs over a real HTTP transport so websocket tests
//! can upgrade.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use carecircle::backend::server::config::LlmConfig;
use carecircle::backend::server::{create_app, ServerConfig};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mocked identity provider serves session data on
pub const SESSION_DATA_PATH: &str = "/session-data";

pub struct TestApp {
    pub server: TestServer,
    pub identity: MockServer,
    pub llm: MockServer,
}

/// Configuration pointing at the given mock servers
pub fn test_config(identity: &MockServer, llm: &MockServer) -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        auth_session_url: format!("{}{}", identity.uri(), SESSION_DATA_PATH),
        llm: LlmConfig {
            api_key: Some("test-key".to_string()),
            base_url: llm.uri(),
            model: "test-model".to_string(),
        },
        crisis_ai_timeout: Duration::from_millis(300),
        companion_timeout: Duration::from_secs(5),
        cookie_secure: false,
        ..ServerConfig::default()
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with a tweaked configuration
    pub async fn spawn_with(customize: impl FnOnce(&mut ServerConfig)) -> Self {
        let identity = MockServer::start().await;
        let llm = MockServer::start().await;

        let mut config = test_config(&identity, &llm);
        customize(&mut config);

        let app = create_app(config).await.expect("Failed to create app");
        let server = TestServer::builder()
            .http_transport()
            .build(app)
            .expect("Failed to start test server");

        Self {
            server,
            identity,
            llm,
        }
    }

    /// Teach the identity provider about `session_id`
    pub async fn mock_identity(&self, session_id: &str, email: &str, name: &str) {
        Mock::given(method("GET"))
            .and(path(SESSION_DATA_PATH))
            .and(header("X-Session-ID", session_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "provider-user",
                "email": email,
                "name": name,
                "picture": "https://example.com/avatar.png",
            })))
            .mount(&self.identity)
            .await;
    }

    /// Exchange a provider session id for a session, returning the full body
    pub async fn create_session(&self, session_id: &str, email: &str, name: &str) -> Value {
        self.mock_identity(session_id, email, name).await;

        let response = self
            .server
            .post("/api/auth/session")
            .add_header(
                HeaderName::from_static("x-session-id"),
                HeaderValue::from_str(session_id).expect("valid header value"),
            )
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// Log a fresh member in and return their session token
    pub async fn login(&self) -> String {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let body = self
            .create_session(
                &format!("sid-{}", suffix),
                &format!("member-{}@example.com", suffix),
                "Test Member",
            )
            .await;
        body["session_token"]
            .as_str()
            .expect("session_token in body")
            .to_string()
    }

    /// Make the text-generation service answer every completion with `content`
    pub async fn mock_completion(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
            .mount(&self.llm)
            .await;
    }
}

/// OpenAI-style completion body with a single choice
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
