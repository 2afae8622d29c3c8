//! Authentication Module
//!
//! Members sign in through an external identity provider; this module turns
//! the provider's one-time session id into a local, cookie-borne session.
//!
//! # Architecture
//!
//! - **`users`** - User model and database operations
//! - **`sessions`** - Opaque session tokens, cookies and expiry
//! - **`identity`** - Identity provider client
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Session**: `X-Session-ID` → provider identity → user found or
//!    created → session stored → cookie set
//! 2. **Me**: cookie or bearer token → session → user profile
//! 3. **Logout**: session deleted, cookie cleared
//!
//! # Security
//!
//! - Tokens are random UUIDs with an `st_` prefix and carry no claims
//! - Sessions expire seven days after creation
//! - The cookie is `HttpOnly` and `SameSite=None`, `Secure` unless disabled
//!   for local development

/// User data model and database operations
pub mod users;

/// Session tokens and cookies
pub mod sessions;

/// Identity provider client
pub mod identity;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{create_user_session, get_me, logout};
pub use identity::{IdentityClient, IdentityError};
pub use users::User;
