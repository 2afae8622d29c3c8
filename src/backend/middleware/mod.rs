//! Middleware Module
//!
//! Request-level concerns shared by the handlers.
//!
//! # Architecture
//!
//! - **`auth`** - `AuthUser` extractor resolving the
//!   session cookie or bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use carecircle::backend::middleware::AuthUser;
//! use axum::response::Json;
//!
//! async fn whoami(auth: AuthUser) -> Json<String> {
//!     Json(auth.user.email)
//! }
//! ```

pub mod auth;

pub use auth::AuthUser;
