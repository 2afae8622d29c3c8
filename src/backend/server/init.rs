/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Seed the default support communities on an empty database
 * 3. Build `AppState` (clients, crisis responder, content filter, chat rooms)
 * 4. Start the periodic chat room cleanup task
 * 5. Create and configure the router
 */
use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::communities::seed_default_communities;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// How often idle chat rooms are dropped
pub const ROOM_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened, migrated or seeded.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing Circle of Care backend server");

    let pool = load_database(&config.database_url).await?;

    if config.seed_communities {
        seed_default_communities(&pool).await?;
    }

    Ok(create_app_with_pool(config, pool))
}

/// Build the router around an already opened pool
///
/// Must be called inside a Tokio runtime: it spawns the room cleanup task.
pub fn create_app_with_pool(config: ServerConfig, pool: SqlitePool) -> Router<()> {
    if config.llm.api_key.is_none() {
        tracing::warn!("LLM_API_KEY is not set; AI companion and crisis guidance will use fallbacks");
    }

    let app_state = AppState::new(config, pool);

    let rooms = app_state.chat_rooms.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ROOM_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = rooms.cleanup_inactive_rooms();
            tracing::debug!("Cleaned up {} inactive chat rooms", removed);
        }
    });

    let app = create_router(app_state);
    tracing::info!("Router configured with periodic cleanup task");

    app
}
