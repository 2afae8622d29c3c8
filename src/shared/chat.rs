/**
 * Live Chat Types
 *
 * Community live chat is reachable two ways: a polling pair of REST
 * endpoints and a websocket per room. Both accept the same
 * `IncomingChatMessage` and both deliver `ChatEvent`s, so a browser can
 * mix the two freely.
 *
 * # Wire Format
 *
 * Events are tagged with a `type` field:
 *
 * ```json
 * {"type":"message","id":"...","community_id":"general","message":"hi",
 *  "user_name":"Anonymous","is_anonymous":true,"created_at":"..."}
 * {"type":"warning","message":"Please keep discussions supportive..."}
 * {"type":"error","message":"message cannot be empty"}
 * ```
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_max_len, require_non_empty, SharedError};

/// Display name used for anonymous authors
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Longest accepted chat message, in characters
pub const MAX_CHAT_MESSAGE_LEN: usize = 2_000;

/// A chat message as sent by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingChatMessage {
    pub message: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default = "default_anonymous")]
    pub is_anonymous: bool,
}

fn default_anonymous() -> bool {
    true
}

impl IncomingChatMessage {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("message", &self.message)?;
        require_max_len("message", &self.message, MAX_CHAT_MESSAGE_LEN)?;
        if let Some(name) = &self.user_name {
            require_max_len("user_name", name, 50)?;
        }
        Ok(())
    }

    /// Name shown next to the message
    ///
    /// Anonymous messages never reveal the supplied name.
    pub fn display_name(&self) -> String {
        if self.is_anonymous {
            return ANONYMOUS_NAME.to_string();
        }
        match self.user_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => ANONYMOUS_NAME.to_string(),
        }
    }
}

/// A stored chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub community_id: String,
    pub message: String,
    pub user_name: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_incoming(community_id: &str, incoming: &IncomingChatMessage) -> Self {
        Self {
            id: Uuid::new_v4(),
            community_id: community_id.to_string(),
            message: incoming.message.trim().to_string(),
            user_name: incoming.display_name(),
            is_anonymous: incoming.is_anonymous,
            created_at: Utc::now(),
        }
    }
}

/// Events pushed to live chat clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatEvent {
    /// A new message in the room
    Message(ChatMessage),
    /// The sender's message was blocked by the content filter
    Warning { message: String },
    /// The sender's frame could not be processed
    Error { message: String },
}

/// Reply to `POST /api/chat/{community_id}/send`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendChatResponse {
    pub message_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
