/**
 * Authentication Extractor
 *
 * `AuthUser` resolves the caller's session for protected handlers:
 *
 * 1. Read the token from the `session_token` cookie, or from
 *    `Authorization: Bearer <token>`
 * 2. Look up the session and reject it once expired
 * 3. Load the user and record the visit in `last_active`
 *
 * Any missing piece rejects the request with 401 "Not authenticated".
 */
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::backend::auth::sessions::{find_active_session, token_from_headers};
use crate::backend::auth::users::{get_user_by_id, touch_last_active, User};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// The authenticated caller
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user: User,
    pub session_token: String,
}

impl AuthUser {
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            tracing::debug!("No session token on {}", parts.uri.path());
            BackendError::unauthorized()
        })?;

        let session = find_active_session(&state.db_pool, &token)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Unknown or expired session token");
                BackendError::unauthorized()
            })?;

        let user = get_user_by_id(&state.db_pool, session.user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Session {} points at missing user {}", session.id, session.user_id);
                BackendError::unauthorized()
            })?;

        if let Err(e) = touch_last_active(&state.db_pool, user.id).await {
            tracing::warn!("Failed to update last_active for {}: {}", user.id, e);
        }

        Ok(AuthUser {
            user,
            session_token: token,
        })
    }
}
