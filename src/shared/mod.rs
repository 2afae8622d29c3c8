//! Shared Module
//!
//! Wire types exchanged with clients over the JSON API and the live chat
//! websocket. Nothing in here touches the database or the network; the
//! backend owns persistence and transport.

/// Shared error types
pub mod error;

/// Community and post types
pub mod community;

/// Profile types
pub mod profile;

/// Live chat types
pub mod chat;

/// Panic button types
pub mod crisis;

/// AI companion types
pub mod companion;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use community::{Community, CommunityCreate, Post, PostCreate, SupportType};
pub use profile::{PrivacyLevel, ProfileUpdate, UserProfile};
pub use chat::{ChatEvent, ChatMessage, IncomingChatMessage, SendChatResponse};
pub use crisis::{EmergencyContact, PanicRequest, PanicResponse, Severity};
pub use companion::{CompanionReply, CompanionRequest};
