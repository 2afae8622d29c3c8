/**
 * Text Generation Client
 *
 * A thin client for an OpenAI-compatible `chat/completions` endpoint. It
 * is shared by the AI companion, the panic button and content moderation.
 *
 * The client sets no request timeout of its own: each caller wraps
 * `complete` in `tokio::time::timeout` with the budget that fits its path
 * (a few seconds for the panic button, longer for companion chat).
 */
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::server::config::LlmConfig;

/// Errors from the text-generation service
#[derive(Debug, Error)]
pub enum CompanionError {
    /// No API key is configured
    #[error("text generation is not configured")]
    NotConfigured,

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Error message or response body
        message: String,
    },

    /// The reply did not contain usable text
    #[error("malformed reply: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [PromptMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct PromptMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the text-generation service
#[derive(Debug, Clone)]
pub struct CompanionClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl CompanionClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Generate a reply to `user_message` under `system_prompt`
    ///
    /// Returns the trimmed text of the first choice. An empty reply is
    /// reported as `Malformed` so callers never show a blank message.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CompanionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompanionError::NotConfigured)?;

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let body = CompletionRequest {
            model: &self.config.model,
            messages: [
                PromptMessage {
                    role: "system",
                    content: system_prompt,
                },
                PromptMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };

        tracing::debug!("Requesting completion from {} ({})", url, self.config.model);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;
        let response = check_response(response).await?;

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| CompanionError::Malformed(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| CompanionError::Malformed("reply contained no text".to_string()))
    }
}

/// Map a non-success status to `CompanionError::Api`
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, CompanionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = if status == StatusCode::TOO_MANY_REQUESTS {
        "rate limited".to_string()
    } else {
        response.text().await.unwrap_or_default()
    };
    Err(CompanionError::Api {
        status: status.as_u16(),
        message,
    })
}
