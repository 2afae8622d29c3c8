/**
 * Send Chat Message Handler
 *
 * `POST /api/chat/{community_id}/send` is the polling clients' way into a
 * room. The message is stored and also pushed to every websocket connected
 * to that room.
 *
 * # Errors
 *
 * - `400` - malformed body, empty or overlong message, filtered content
 * - `500` - store failure
 */
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::backend::chat::service::post_message;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{IncomingChatMessage, SendChatResponse};

/// Send chat message handler
///
/// # Example Request
///
/// ```http
/// POST /api/chat/general/send HTTP/1.1
/// Content-Type: application/json
///
/// {"message": "Made it through today", "user_name": "Sam", "is_anonymous": false}
/// ```
///
/// # Example Response
///
/// ```json
/// {"message_id": "4f0c...", "status": "sent", "created_at": "2025-01-01T12:00:00Z"}
/// ```
pub async fn send_chat_message(
    State(state): State<AppState>,
    Path(community_id): Path<String>,
    body: Result<Json<IncomingChatMessage>, JsonRejection>,
) -> Result<Json<SendChatResponse>, BackendError> {
    let Json(incoming) = body?;
    let message = post_message(&state, &community_id, &incoming).await?;

    Ok(Json(SendChatResponse {
        message_id: message.id,
        status: "sent".to_string(),
        created_at: message.created_at,
    }))
}
