//! Common test utilities and helpers
//!
//! - `app` spawns a server with mocked outbound services and logs members in
//! - `assertions` checks the JSON error body shared by strict endpoints

pub mod app;
pub mod assertions;

pub use app::*;
pub use assertions::*;
