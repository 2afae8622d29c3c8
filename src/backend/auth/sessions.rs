/**
 * Session Management
 *
 * Sessions are opaque tokens (`st_<uuid>`) stored server side with a fixed
 * seven-day expiry. The token is delivered as the `session_token` cookie;
 * API clients may send it as `Authorization: Bearer <token>` instead.
 */
use axum::http::{header, HeaderMap, HeaderValue};
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Cookie carrying the session token
pub const SESSION_COOKIE: &str = "session_token";

/// Session lifetime in seconds (7 days)
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Session row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl UserSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Generate a fresh opaque session token
pub fn generate_token() -> String {
    format!("st_{}", Uuid::new_v4())
}

/// Create and store a session for `user_id`
pub async fn create_session(pool: &SqlitePool, user_id: Uuid) -> Result<UserSession, sqlx::Error> {
    let now = Utc::now();
    let session = UserSession {
        id: Uuid::new_v4(),
        user_id,
        session_token: generate_token(),
        expires_at: now + Duration::seconds(SESSION_TTL_SECS),
        created_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO sessions (id, user_id, session_token, expires_at, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(session.id)
    .bind(session.user_id)
    .bind(&session.session_token)
    .bind(session.expires_at)
    .bind(session.created_at)
    .execute(pool)
    .await?;

    Ok(session)
}

/// Look up a session by token, ignoring expiry
pub async fn get_session(pool: &SqlitePool, token: &str) -> Result<Option<UserSession>, sqlx::Error> {
    sqlx::query_as::<_, UserSession>(
        r#"
        SELECT id, user_id, session_token, expires_at, created_at
        FROM sessions
        WHERE session_token = ?
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Look up a session by token, returning `None` once it has expired
pub async fn find_active_session(
    pool: &SqlitePool,
    token: &str,
) -> Result<Option<UserSession>, sqlx::Error> {
    let session = get_session(pool, token).await?;
    Ok(session.filter(|s| !s.is_expired_at(Utc::now())))
}

/// Delete a session (logout). Returns whether a row was removed.
pub async fn delete_session(pool: &SqlitePool, token: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE session_token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Extract the session token from the cookie or the Authorization header
///
/// The cookie wins when both are present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string());

    from_cookie
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(|token| token.trim().to_string())
        })
        .filter(|token| !token.is_empty())
}

/// `Set-Cookie` value that installs the session cookie
pub fn session_cookie(token: &str, secure: bool) -> Option<HeaderValue> {
    let mut cookie = format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=None",
        SESSION_COOKIE, token, SESSION_TTL_SECS
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).ok()
}

/// `Set-Cookie` value that removes the session cookie
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("session_token=; Max-Age=0; Path=/; HttpOnly; SameSite=None; Secure")
}
