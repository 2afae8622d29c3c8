/**
 * Get Current User Handler
 *
 * `GET /api/auth/me` returns the profile of the session's member. The
 * `AuthUser` extractor has already rejected missing or expired sessions.
 */
use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::UserProfile;

pub async fn get_me(auth: AuthUser) -> Json<UserProfile> {
    Json(auth.user.into_profile())
}
