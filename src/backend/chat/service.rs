//! The single path every live chat message takes, whichever transport it
//! arrived on: validate, filter, store, then broadcast to the room.

use crate::backend::chat::db::save_message;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{ChatEvent, ChatMessage, IncomingChatMessage};

/// Accept a message into `room`
///
/// Nothing is stored or broadcast unless validation and the content filter
/// both pass.
pub async fn post_message(
    state: &AppState,
    room: &str,
    incoming: &IncomingChatMessage,
) -> Result<ChatMessage, BackendError> {
    incoming.validate()?;
    state.content_filter.screen(&incoming.message).await?;

    let message = ChatMessage::from_incoming(room, incoming);
    save_message(&state.db_pool, &message).await?;

    let delivered = state
        .chat_rooms
        .broadcast(room, ChatEvent::Message(message.clone()));
    tracing::debug!("Chat message {} delivered to {} socket(s) in {}", message.id, delivered, room);

    Ok(message)
}
