/**
 * Live Chat WebSocket Handler
 *
 * `GET /ws/chat/{community_id}` upgrades to a websocket joined to one room.
 *
 * # Frames
 *
 * The client sends `IncomingChatMessage` JSON. The server answers with
 * tagged `ChatEvent`s:
 *
 * - `message` - an accepted message, sent to every socket in the room
 *   including the author's
 * - `warning` - the author's message was filtered; only the author sees it
 * - `error` - the frame could not be used; only the author sees it
 *
 * # Tasks
 *
 * Each connection runs two tasks. The send task forwards both the room's
 * broadcast channel and a private channel for warnings and errors to the
 * socket. The receive task reads client frames and runs them through the
 * same path as `POST /api/chat/{community_id}/send`. When either task
 * ends the other is aborted, which drops the room subscription.
 */
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{broadcast::error::RecvError, mpsc};

use crate::backend::chat::service::post_message;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{ChatEvent, IncomingChatMessage, SharedError};

/// Pending warnings/errors per socket before the receive loop waits
const DIRECT_CAPACITY: usize = 16;

pub async fn chat_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(community_id): Path<String>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state, community_id))
}

async fn handle_socket(socket: WebSocket, state: AppState, room: String) {
    let (mut sink, mut stream) = socket.split();
    let mut room_rx = state.chat_rooms.subscribe(&room);
    let (direct_tx, mut direct_rx) = mpsc::channel::<ChatEvent>(DIRECT_CAPACITY);

    tracing::info!(
        "WebSocket joined room '{}' ({} connected)",
        room,
        state.chat_rooms.subscriber_count(&room)
    );

    let send_room = room.clone();
    let mut send_task = tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                received = room_rx.recv() => match received {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Socket in '{}' lagged, skipped {} events", send_room, skipped);
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                },
                direct = direct_rx.recv() => match direct {
                    Some(event) => event,
                    None => break,
                },
            };

            let text = match serde_json::to_string(&event) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("Failed to serialize chat event: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let recv_state = state.clone();
    let recv_room = room.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(frame)) = stream.next().await {
            match frame {
                Message::Text(text) => {
                    if let Some(reply) = handle_frame(&recv_state, &recv_room, text.as_str()).await {
                        if direct_tx.send(reply).await.is_err() {
                            break;
                        }
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!("WebSocket left room '{}'", room);
}

/// Process one client frame
///
/// Returns the private reply for the author, if there is one. Accepted
/// messages reach the author through the room broadcast instead.
pub async fn handle_frame(state: &AppState, room: &str, text: &str) -> Option<ChatEvent> {
    let incoming: IncomingChatMessage = match serde_json::from_str(text) {
        Ok(incoming) => incoming,
        Err(e) => {
            tracing::warn!("Unreadable chat frame in '{}': {}", room, e);
            return Some(ChatEvent::Error {
                message: "Invalid message format".to_string(),
            });
        }
    };

    match post_message(state, room, &incoming).await {
        Ok(_) => None,
        Err(BackendError::SharedError(SharedError::ContentRejected { reason })) => {
            Some(ChatEvent::Warning { message: reason })
        }
        Err(e) if e.status_code().is_client_error() => Some(ChatEvent::Error {
            message: e.message(),
        }),
        Err(e) => {
            tracing::error!("Failed to accept chat message in '{}': {}", room, e);
            Some(ChatEvent::Error {
                message: "Failed to send message".to_string(),
            })
        }
    }
}
