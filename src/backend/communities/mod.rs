//! Community Boards Module
//!
//! Communities and the posts inside them.
//!
//! - **`db`** - persistence and default-community seeding
//! - **`handlers`** - HTTP handlers under `/api/communities`

pub mod db;

pub mod handlers;

pub use db::seed_default_communities;
pub use handlers::{create_community, create_post, get_communities, get_community_posts};
