//! Companion chat history.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// One companion exchange: the member's message and the reply they got
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanionExchange {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub response: String,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

impl CompanionExchange {
    pub fn new(user_id: Uuid, message: &str, response: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            message: message.to_string(),
            response: response.to_string(),
            session_id: format!("user_{}_{}", user_id, Uuid::new_v4()),
            created_at: Utc::now(),
        }
    }
}

pub async fn save_exchange(pool: &SqlitePool, exchange: &CompanionExchange) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO chat_history (id, user_id, message, response, session_id, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(exchange.id)
    .bind(exchange.user_id)
    .bind(&exchange.message)
    .bind(&exchange.response)
    .bind(&exchange.session_id)
    .bind(exchange.created_at)
    .execute(pool)
    .await?;
    Ok(())
}
