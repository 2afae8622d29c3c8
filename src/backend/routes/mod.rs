//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, CORS and tracing layers
//! ├── api_routes.rs   - /api endpoints
//! └── chat_routes.rs  - /api/chat endpoints and the /ws/chat websocket
//! ```

/// Main router creation
pub mod router;

/// Live chat routes
pub mod chat_routes;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
