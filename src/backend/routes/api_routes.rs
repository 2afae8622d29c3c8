/**
 * API Routes
 *
 * Every JSON endpoint under `/api`.
 *
 * # Routes
 *
 * ## Health
 * - `GET /api/health` (the bare `/api` root is registered by the router)
 *
 * ## Authentication
 * - `POST /api/auth/session` - exchange an identity-provider session id
 * - `POST /api/auth/logout`
 * - `GET /api/auth/me`
 *
 * ## Communities
 * - `GET|POST /api/communities`
 * - `GET|POST /api/communities/{community_id}/posts`
 *
 * ## Profile
 * - `GET|PATCH /api/profile`
 *
 * ## AI
 * - `POST /api/ai/chat` - companion chat (session required)
 * - `POST /api/ai/panic-button` - crisis support (no session, never fails)
 */
use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{create_user_session, get_me, logout};
use crate::backend::communities::{create_community, create_post, get_communities, get_community_posts};
use crate::backend::companion::chat_with_companion;
use crate::backend::crisis::panic_button;
use crate::backend::health::health_check;
use crate::backend::profile::{get_profile, update_profile};
use crate::backend::server::state::AppState;

/// Routes mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/session", post(create_user_session))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(get_me))
        .route("/communities", get(get_communities).post(create_community))
        .route(
            "/communities/{community_id}/posts",
            get(get_community_posts).post(create_post),
        )
        .route("/profile", get(get_profile).patch(update_profile))
        .route("/ai/chat", post(chat_with_companion))
        .route("/ai/panic-button", post(panic_button))
}
