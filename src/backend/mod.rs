//! Backend Module
//!
//! All server-side code for Circle of Care: an Axum HTTP server backed by
//! SQLite, with an outbound identity provider and an OpenAI-compatible
//! text-generation service.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route tables and router assembly
//! - **`auth`** - Users, sessions and the identity-provider exchange
//! - **`middleware`** - The `AuthUser` extractor
//! - **`communities`** - Support communities and their posts
//! - **`profile`** - Reading and editing the caller's profile
//! - **`chat`** - Live community chat over REST and websocket
//! - **`companion`** - AI companion chat and the text-generation client
//! - **`crisis`** - The panic button
//! - **`moderation`** - Keyword and model-backed content screening
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── health.rs       - Liveness endpoints
//! ├── server/
//! ├── routes/
//! ├── auth/
//! ├── middleware/
//! ├── communities/
//! ├── profile/
//! ├── chat/
//! ├── companion/
//! ├── crisis/
//! ├── moderation/
//! └── error/
//! ```
//!
//! # Error Policy
//!
//! Every handler except the panic button returns `Result<_, BackendError>`
//! and fails with a JSON `{error, status}` body. The panic button always
//! answers 200 with a complete crisis response.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Support communities and posts
pub mod communities;

/// Profile endpoints
pub mod profile;

/// Live community chat
pub mod chat;

/// AI companion chat
pub mod companion;

/// Crisis panic button
pub mod crisis;

/// Content screening
pub mod moderation;

/// Liveness endpoints
pub mod health;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
