//! Shared Error Types
//!
//! Errors raised while validating or decoding the wire types in
//! [`crate::shared`]. They carry no HTTP knowledge; the backend maps them to
//! status codes in `backend::error`.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON encoding/decoding failures
//! - `ValidationError` - A request field failed validation
//! - `ContentRejected` - Text was blocked by the content filter
//!
//! # Usage
//!
//! ```rust
//! use carecircle::shared::error::SharedError;
//!
//! let error = SharedError::validation("message", "Message cannot be empty");
//! assert!(error.to_string().contains("message"));
//! ```
use thiserror::Error;

/// Errors shared by request validation and content moderation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Content was blocked before it reached storage
    #[error("{reason}")]
    ContentRejected {
        /// Reason shown to the author
        reason: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new content rejection
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::ContentRejected {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Reject a field that is empty once surrounding whitespace is removed
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Reject a field longer than `max` characters
pub fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), SharedError> {
    if value.chars().count() > max {
        return Err(SharedError::validation(
            field,
            format!("{} must be at most {} characters", field, max),
        ));
    }
    Ok(())
}
