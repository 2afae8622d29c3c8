//! AI Companion Module
//!
//! Everything that talks to the text-generation service.
//!
//! # Module Structure
//!
//! ```text
//! companion/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - OpenAI-compatible chat/completions client
//! ├── prompts.rs  - Companion, crisis and moderation prompts
//! ├── db.rs       - Companion chat history
//! └── handlers.rs - POST /api/ai/chat
//! ```
//!
//! The client is shared: the crisis responder and the content filter hold
//! clones of the same `CompanionClient`.

pub mod client;

pub mod prompts;

pub mod db;

pub mod handlers;

pub use client::{CompanionClient, CompanionError};
pub use handlers::chat_with_companion;
