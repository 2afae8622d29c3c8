//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Response types
//! ├── session.rs  - Identity provider exchange
//! ├── logout.rs   - Session deletion
//! └── me.rs       - Current user
//! ```
//!
//! # Handlers
//!
//! - **`create_user_session`** - POST /api/auth/session
//! - **`logout`** - POST /api/auth/logout
//! - **`get_me`** - GET /api/auth/me

/// Response types
pub mod types;

/// Session exchange handler
pub mod session;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

pub use types::{MessageResponse, SessionResponse};

pub use logout::logout;
pub use me::get_me;
pub use session::create_user_session;
