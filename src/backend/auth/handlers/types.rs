/**
 * Authentication Handler Types
 *
 * Response bodies for the session exchange and logout handlers.
 * `GET /api/auth/me` returns a `UserProfile` directly.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Session response
///
/// Returned by `POST /api/auth/session`. The token is also set as the
/// `session_token` cookie; it is repeated here for clients that cannot
/// read cookies.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub session_token: String,
}

impl SessionResponse {
    pub fn new(user: &User, session_token: String) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            picture: user.picture.clone(),
            session_token,
        }
    }
}

/// Plain acknowledgement body, e.g. `{"message": "Logged out successfully"}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
