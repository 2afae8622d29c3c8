/**
 * Session Exchange Handler
 *
 * This module implements `POST /api/auth/session`.
 *
 * # Process
 *
 * 1. Read the provider session id from the `X-Session-ID` header
 * 2. Exchange it with the identity provider for email, name and picture
 * 3. Find the member by email, creating them on first login
 * 4. Store a new seven-day session
 * 5. Return the member and set the `session_token` cookie
 *
 * # Errors
 *
 * - `400` - header missing, or the provider rejected the id
 * - `500` - provider unreachable or store failure
 */
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::SessionResponse;
use crate::backend::auth::identity::{IdentityClient, IdentityError};
use crate::backend::auth::sessions::{create_session, session_cookie};
use crate::backend::auth::users::find_or_create_user;
use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;

/// Header carrying the identity provider's session id
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

/// Session exchange handler
///
/// # Example Request
///
/// ```http
/// POST /api/auth/session HTTP/1.1
/// X-Session-ID: 7c1f...
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "river@example.com",
///   "name": "River",
///   "picture": null,
///   "session_token": "st_9b2e..."
/// }
/// ```
pub async fn create_user_session(
    State(pool): State<SqlitePool>,
    State(identity): State<IdentityClient>,
    State(config): State<Arc<ServerConfig>>,
    headers: HeaderMap,
) -> Result<Response, BackendError> {
    let session_id = headers
        .get(SESSION_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| BackendError::bad_request("X-Session-ID header required"))?;

    let identity = identity
        .fetch_identity(session_id)
        .await
        .map_err(|e| match e {
            IdentityError::Rejected { .. } | IdentityError::Malformed(_) => {
                tracing::warn!("Session exchange rejected: {}", e);
                BackendError::bad_request("Invalid session ID")
            }
            IdentityError::Http(_) => {
                tracing::error!("Identity provider unreachable: {}", e);
                BackendError::internal("Session processing failed")
            }
        })?;

    let user = find_or_create_user(
        &pool,
        &identity.email,
        &identity.name,
        identity.picture.as_deref(),
    )
    .await?;
    let session = create_session(&pool, user.id).await?;

    tracing::info!("Session created for {} ({})", user.email, user.id);

    let cookie = session_cookie(&session.session_token, config.cookie_secure)
        .ok_or_else(|| BackendError::internal("Session processing failed"))?;
    let body = SessionResponse::new(&user, session.session_token);

    Ok(([(header::SET_COOKIE, cookie)], Json(body)).into_response())
}
