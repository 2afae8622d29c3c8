//! AI Companion Types

use serde::{Deserialize, Serialize};

use crate::shared::error::{require_max_len, require_non_empty, SharedError};

/// Body of `POST /api/ai/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionRequest {
    pub message: String,
    /// Set by the panic button UI to switch the companion into crisis mode
    #[serde(default)]
    pub is_panic: bool,
}

impl CompanionRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("message", &self.message)?;
        require_max_len("message", &self.message, 4_000)
    }
}

/// Reply to `POST /api/ai/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanionReply {
    pub response: String,
    pub is_panic_response: bool,
}
