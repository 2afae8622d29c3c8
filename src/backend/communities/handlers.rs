/**
 * Community Board Handlers
 *
 * - `GET  /api/communities` - list every community (public)
 * - `POST /api/communities` - create a community (session required)
 * - `GET  /api/communities/{id}/posts` - list posts, oldest first (public)
 * - `POST /api/communities/{id}/posts` - write a post (session required)
 *
 * Titles and post bodies go through the content filter before anything is
 * stored; a blocked post is a 400 and leaves no row behind.
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::communities::db::{
    community_exists, insert_community, insert_post, list_communities, list_posts,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::moderation::ContentFilter;
use crate::shared::{Community, CommunityCreate, Post, PostCreate};

pub async fn get_communities(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Community>>, BackendError> {
    Ok(Json(list_communities(&pool).await?))
}

pub async fn create_community(
    State(pool): State<SqlitePool>,
    State(filter): State<Arc<ContentFilter>>,
    auth: AuthUser,
    body: Result<Json<CommunityCreate>, JsonRejection>,
) -> Result<Json<Community>, BackendError> {
    let Json(request) = body?;
    request.validate()?;
    filter
        .screen(&format!("{}\n{}", request.name, request.description))
        .await?;

    let community = Community::new(request, auth.id());
    insert_community(&pool, &community).await?;

    tracing::info!("Community '{}' created by {}", community.name, auth.id());
    Ok(Json(community))
}

/// An id that is not a UUID names no community, so it simply has no posts
pub async fn get_community_posts(
    State(pool): State<SqlitePool>,
    Path(community_id): Path<String>,
) -> Result<Json<Vec<Post>>, BackendError> {
    match Uuid::parse_str(&community_id) {
        Ok(id) => Ok(Json(list_posts(&pool, id).await?)),
        Err(_) => Ok(Json(Vec::new())),
    }
}

pub async fn create_post(
    State(pool): State<SqlitePool>,
    State(filter): State<Arc<ContentFilter>>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    body: Result<Json<PostCreate>, JsonRejection>,
) -> Result<Json<Post>, BackendError> {
    let Json(request) = body?;
    request.validate()?;

    let community_id = match Uuid::parse_str(&community_id) {
        Ok(id) => id,
        Err(_) => return Err(BackendError::not_found("Community not found")),
    };
    if !community_exists(&pool, community_id).await? {
        return Err(BackendError::not_found("Community not found"));
    }

    filter
        .screen(&format!("{}\n{}", request.title, request.content))
        .await?;

    let post = Post::new(community_id, auth.id(), request);
    insert_post(&pool, &post).await?;

    tracing::info!("Post {} created in community {}", post.id, community_id);
    Ok(Json(post))
}
