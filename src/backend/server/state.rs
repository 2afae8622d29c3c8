/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central container shared by every handler:
 * - SQLite connection pool
 * - Loaded configuration
 * - Outbound clients (identity provider, text generation)
 * - The crisis responder and content filter built on top of them
 * - Per-room live chat broadcast channels
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the pool and the HTTP
 * clients are internally reference counted, the rest sit behind `Arc`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers take only the part they need,
 * e.g. `State(pool): State<SqlitePool>` or `State(rooms): State<ChatRooms>`.
 */
use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::identity::IdentityClient;
use crate::backend::chat::state::ChatRooms;
use crate::backend::companion::client::CompanionClient;
use crate::backend::crisis::orchestrator::CrisisResponder;
use crate::backend::moderation::filter::ContentFilter;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,

    /// Identity provider client used by `POST /api/auth/session`
    pub identity: IdentityClient,

    /// Text-generation client used by the AI companion
    pub companion: CompanionClient,

    /// Panic button responder
    pub crisis: CrisisResponder,

    /// Keyword (and optionally model-backed) content filter
    pub content_filter: Arc<ContentFilter>,

    /// Live chat broadcast channels, one per room
    pub chat_rooms: ChatRooms,
}

impl AppState {
    /// Build the state from a configuration and an open pool
    pub fn new(config: ServerConfig, db_pool: SqlitePool) -> Self {
        let companion = CompanionClient::new(config.llm.clone());
        let crisis = CrisisResponder::new(companion.clone(), config.crisis_ai_timeout);
        let content_filter = if config.content_moderation {
            ContentFilter::with_moderation(companion.clone(), config.companion_timeout)
        } else {
            ContentFilter::keywords_only()
        };

        Self {
            db_pool,
            identity: IdentityClient::new(config.auth_session_url.clone()),
            companion,
            crisis,
            content_filter: Arc::new(content_filter),
            chat_rooms: ChatRooms::new(),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for IdentityClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.identity.clone()
    }
}

impl FromRef<AppState> for CompanionClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.companion.clone()
    }
}

impl FromRef<AppState> for CrisisResponder {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.crisis.clone()
    }
}

impl FromRef<AppState> for Arc<ContentFilter> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.content_filter.clone()
    }
}

impl FromRef<AppState> for ChatRooms {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat_rooms.clone()
    }
}
