//! Profile Types
//!
//! The user record returned by `/api/auth/me` and `/api/profile`, plus the
//! partial update accepted by `PATCH /api/profile`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_max_len, SharedError};

/// Who can see a member's profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    #[default]
    Private,
    Community,
    Public,
}

impl PrivacyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Community => "community",
            Self::Public => "public",
        }
    }

    /// Stored values that are not recognised read back as `Private`
    pub fn from_stored(value: &str) -> Self {
        match value {
            "community" => Self::Community,
            "public" => Self::Public,
            _ => Self::Private,
        }
    }
}

/// A member as seen by themselves
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub is_anonymous: bool,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub health_conditions: Vec<String>,
    pub bio: Option<String>,
    pub privacy_level: PrivacyLevel,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

/// Body of `PATCH /api/profile`
///
/// Only these five fields can be changed. Any other key in the request body
/// is ignored, so clients cannot overwrite `email`, `id` or timestamps.
///
/// Each field is `None` when the key is absent and `Some(None)` when it is
/// an explicit `null`. A `null` clears `display_name`, `bio` and
/// `avatar_url`, empties `health_conditions` and resets `privacy_level` to
/// `private`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub health_conditions: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<Option<PrivacyLevel>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
}

/// Marks a key that appeared in the body, even when its value is `null`
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(Some(display_name)) = &self.display_name {
            require_max_len("display_name", display_name, 60)?;
        }
        if let Some(Some(bio)) = &self.bio {
            require_max_len("bio", bio, 1_000)?;
        }
        if let Some(Some(conditions)) = &self.health_conditions {
            if conditions.len() > 20 {
                return Err(SharedError::validation(
                    "health_conditions",
                    "at most 20 health conditions can be listed",
                ));
            }
            for condition in conditions {
                require_max_len("health_conditions", condition, 60)?;
            }
        }
        if let Some(Some(avatar_url)) = &self.avatar_url {
            require_max_len("avatar_url", avatar_url, 2_048)?;
        }
        Ok(())
    }

    /// True when the body named none of the writable fields
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
