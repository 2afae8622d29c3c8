//! Circle of Care
//!
//! Backend for a peer-support platform for mental health: support
//! communities with posts, live community chat, an AI companion, and a
//! crisis panic button that always answers.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, input validation and the shared error type
//! - **`backend`** - Axum server, persistence and outbound integrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use carecircle::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation and content rejections
//! - `backend::BackendError` for everything a handler can fail with
//! - The crisis path has no error type: every failure becomes a fallback

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
