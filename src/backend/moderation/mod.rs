//! Content Moderation Module
//!
//! Screens user-written text (board posts, live chat) before it is stored.
//! The keyword pass always runs; the model pass runs only when
//! `CONTENT_MODERATION` is enabled.

pub mod filter;

pub use filter::{find_banned_keyword, ContentFilter, Verdict, BLOCKED_MESSAGE};
