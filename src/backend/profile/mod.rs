//! Profile Module
//!
//! Read and update the signed-in member's profile. Storage lives with the
//! user model in `auth::users`.

pub mod handlers;

pub use handlers::{get_profile, update_profile};
