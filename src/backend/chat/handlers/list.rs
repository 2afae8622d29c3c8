//! `GET /api/chat/{community_id}/messages?limit=N`

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::chat::db::{clamp_limit, load_recent_messages};
use crate::backend::error::BackendError;
use crate::shared::ChatMessage;

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

/// The last `limit` messages of the room (default 50, at most 200), oldest
/// first
pub async fn get_chat_messages(
    State(pool): State<SqlitePool>,
    Path(community_id): Path<String>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<ChatMessage>>, BackendError> {
    let Query(query) = query?;
    let limit = clamp_limit(query.limit);
    Ok(Json(load_recent_messages(&pool, &community_id, limit).await?))
}
