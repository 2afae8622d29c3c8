/**
 * Logout Handler
 *
 * `POST /api/auth/logout` deletes the caller's session, if any, and clears
 * the cookie. It succeeds whether or not a session was presented.
 */
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::sessions::{clear_session_cookie, delete_session, token_from_headers};
use crate::backend::error::BackendError;

pub async fn logout(
    State(pool): State<SqlitePool>,
    headers: HeaderMap,
) -> Result<Response, BackendError> {
    if let Some(token) = token_from_headers(&headers) {
        if delete_session(&pool, &token).await? {
            tracing::info!("Session logged out");
        }
    }

    Ok((
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(MessageResponse::new("Logged out successfully")),
    )
        .into_response())
}
