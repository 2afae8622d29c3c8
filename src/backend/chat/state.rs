/**
 * Live Chat Rooms
 *
 * One `broadcast` channel per room key. A websocket subscribes to its room
 * when it connects; both the websocket and the REST send path publish into
 * the same channel, so every connected socket sees every message.
 *
 * Rooms are created lazily and removed by `cleanup_inactive_rooms` once
 * their last subscriber disconnects. The server runs that sweep every five
 * minutes.
 */
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;

use crate::shared::ChatEvent;

/// Buffered events per room before slow receivers start lagging
const ROOM_CAPACITY: usize = 100;

type RoomMap = HashMap<String, broadcast::Sender<ChatEvent>>;

/// Per-room broadcast channels for live chat
#[derive(Clone, Default)]
pub struct ChatRooms {
    channels: Arc<Mutex<RoomMap>>,
}

impl ChatRooms {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RoomMap> {
        // A panic while holding the lock cannot leave the map half-written
        self.channels.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get or create the sender for a room
    pub fn sender(&self, room: &str) -> broadcast::Sender<ChatEvent> {
        self.lock()
            .entry(room.to_string())
            .or_insert_with(|| broadcast::channel(ROOM_CAPACITY).0)
            .clone()
    }

    /// Subscribe to a room, creating it if needed
    pub fn subscribe(&self, room: &str) -> broadcast::Receiver<ChatEvent> {
        self.sender(room).subscribe()
    }

    /// Broadcast an event to everyone in a room
    ///
    /// Returns the number of sockets that received it. Rooms nobody has
    /// joined are not created.
    pub fn broadcast(&self, room: &str, event: ChatEvent) -> usize {
        match self.lock().get(room) {
            Some(sender) => sender.send(event).unwrap_or(0),
            None => 0,
        }
    }

    /// Drop rooms with no subscribers. Returns how many were removed.
    pub fn cleanup_inactive_rooms(&self) -> usize {
        let mut channels = self.lock();
        let before = channels.len();
        channels.retain(|_, sender| sender.receiver_count() > 0);
        before - channels.len()
    }

    pub fn subscriber_count(&self, room: &str) -> usize {
        self.lock()
            .get(room)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    pub fn room_count(&self) -> usize {
        self.lock().len()
    }
}
