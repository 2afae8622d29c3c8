//! Live Chat Handlers
//!
//! - **`send`** - POST /api/chat/{community_id}/send
//! - **`list`** - GET /api/chat/{community_id}/messages
//! - **`socket`** - GET /ws/chat/{community_id} (websocket upgrade)

pub mod send;

pub mod list;

pub mod socket;

pub use list::get_chat_messages;
pub use send::send_chat_message;
pub use socket::chat_socket;
