/**
 * Live Chat Routes
 *
 * - `POST /api/chat/{community_id}/send` - send a message (polling clients)
 * - `GET /api/chat/{community_id}/messages` - recent history
 * - `GET /ws/chat/{community_id}` - websocket upgrade
 *
 * The websocket lives outside `/api`, so this module returns two routers
 * that `router::create_router` mounts separately.
 */
use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::chat::{chat_socket, get_chat_messages, send_chat_message};
use crate::backend::server::state::AppState;

/// Routes mounted under `/api/chat`
pub fn chat_api_routes() -> Router<AppState> {
    Router::new()
        .route("/{community_id}/send", post(send_chat_message))
        .route("/{community_id}/messages", get(get_chat_messages))
}

/// Routes mounted under `/ws`
pub fn chat_socket_routes() -> Router<AppState> {
    Router::new().route("/chat/{community_id}", get(chat_socket))
}
