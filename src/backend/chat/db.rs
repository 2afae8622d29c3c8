/**
 * Database Operations for Live Chat Messages
 *
 * Messages are appended to `chat_messages` and read back in insertion
 * order (`rowid`), which is the order the server accepted them in.
 */
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::ChatMessage;

/// Messages returned when the client does not ask for a limit
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Upper bound on `?limit=`
pub const MAX_HISTORY_LIMIT: u32 = 200;

#[derive(Debug, sqlx::FromRow)]
struct ChatMessageRow {
    id: Uuid,
    community_id: String,
    message: String,
    user_name: String,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
}

impl From<ChatMessageRow> for ChatMessage {
    fn from(row: ChatMessageRow) -> Self {
        Self {
            id: row.id,
            community_id: row.community_id,
            message: row.message,
            user_name: row.user_name,
            is_anonymous: row.is_anonymous,
            created_at: row.created_at,
        }
    }
}

/// Save a message to the database
pub async fn save_message(pool: &SqlitePool, message: &ChatMessage) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO chat_messages (id, community_id, message, user_name, is_anonymous, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(message.id)
    .bind(&message.community_id)
    .bind(&message.message)
    .bind(&message.user_name)
    .bind(message.is_anonymous)
    .bind(message.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// The last `limit` messages of a room, oldest first
pub async fn load_recent_messages(
    pool: &SqlitePool,
    room: &str,
    limit: u32,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ChatMessageRow>(
        r#"
        SELECT id, community_id, message, user_name, is_anonymous, created_at
        FROM (
            SELECT rowid AS seq, id, community_id, message, user_name, is_anonymous, created_at
            FROM chat_messages
            WHERE community_id = ?
            ORDER BY rowid DESC
            LIMIT ?
        )
        ORDER BY seq ASC
        "#,
    )
    .bind(room)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(ChatMessage::from).collect())
}

/// Clamp a requested history size into `1..=MAX_HISTORY_LIMIT`
pub fn clamp_limit(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}
