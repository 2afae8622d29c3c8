/**
 * Profile Handlers
 *
 * `GET /api/profile` returns the caller's profile. `PATCH /api/profile`
 * applies a partial update; only `display_name`, `bio`,
 * `health_conditions`, `privacy_level` and `avatar_url` are writable and
 * any other key in the body is ignored. An explicit `null` clears a field.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::users::update_profile as store_profile_update;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{ProfileUpdate, UserProfile};

pub async fn get_profile(auth: AuthUser) -> Json<UserProfile> {
    Json(auth.user.into_profile())
}

pub async fn update_profile(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
    body: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Json(update) = body?;
    update.validate()?;

    if update.is_empty() {
        tracing::debug!("Empty profile update from {}", auth.id());
        return Ok(Json(MessageResponse::new("Profile updated successfully")));
    }
    store_profile_update(&pool, auth.id(), &update).await?;

    tracing::info!("Profile updated for {}", auth.id());
    Ok(Json(MessageResponse::new("Profile updated successfully")))
}
