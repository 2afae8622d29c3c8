//! Live Chat Module
//!
//! Community chat rooms reachable by REST polling and by websocket.
//!
//! # Architecture
//!
//! - **`state`** - per-room broadcast channels (`ChatRooms`)
//! - **`db`** - message persistence and history queries
//! - **`service`** - validate → filter → store → broadcast, shared by both
//!   transports
//! - **`handlers`** - the HTTP and websocket endpoints
//!
//! A room is any string key; it does not have to name a community.

/// Per-room broadcast channels
pub mod state;

/// Database operations for chat messages
pub mod db;

/// Message acceptance path
pub mod service;

/// HTTP and websocket handlers
pub mod handlers;

pub use handlers::{chat_socket, get_chat_messages, send_chat_message};
pub use state::ChatRooms;
