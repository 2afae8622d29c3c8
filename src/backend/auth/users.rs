/**
 * User Model and Database Operations
 *
 * Members are created the first time they complete an identity-provider
 * login, keyed by email. Afterwards only the profile fields change.
 */
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::shared::{PrivacyLevel, ProfileUpdate, UserProfile};

const USER_COLUMNS: &str = "id, email, name, picture, is_anonymous, display_name, avatar_url, \
     health_conditions, bio, privacy_level, created_at, last_active, updated_at";

/// User row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub is_anonymous: bool,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub health_conditions: Json<Vec<String>>,
    pub bio: Option<String>,
    pub privacy_level: String,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email,
            name: self.name,
            picture: self.picture,
            is_anonymous: self.is_anonymous,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            health_conditions: self.health_conditions.0,
            bio: self.bio,
            privacy_level: PrivacyLevel::from_stored(&self.privacy_level),
            created_at: self.created_at,
            last_active: self.last_active,
        }
    }
}

/// Create a new user
///
/// The display name starts out as the provider's name.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    picture: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, email, name, picture, is_anonymous, display_name, avatar_url,
                           health_conditions, bio, privacy_level, created_at, last_active, updated_at)
        VALUES (?, ?, ?, ?, 0, ?, NULL, '[]', NULL, 'private', ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(name)
    .bind(picture)
    .bind(name)
    .bind(now)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_user_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Find the user for `email`, creating one on first login
pub async fn find_or_create_user(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    picture: Option<&str>,
) -> Result<User, sqlx::Error> {
    if let Some(user) = get_user_by_email(pool, email).await? {
        return Ok(user);
    }
    tracing::info!("Creating user for {}", email);
    create_user(pool, email, name, picture).await
}

/// Record that the user was just seen
pub async fn touch_last_active(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET last_active = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Apply a partial profile update
///
/// Only the keys present in `update` are written. Absent keys keep their
/// stored value; an explicit `null` clears the column, or resets it to its
/// default when the column cannot be empty.
pub async fn update_profile(
    pool: &SqlitePool,
    id: Uuid,
    update: &ProfileUpdate,
) -> Result<User, sqlx::Error> {
    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE users SET ");
    let mut set = builder.separated(", ");

    if let Some(display_name) = &update.display_name {
        set.push("display_name = ").push_bind_unseparated(display_name.clone());
    }
    if let Some(bio) = &update.bio {
        set.push("bio = ").push_bind_unseparated(bio.clone());
    }
    if let Some(conditions) = &update.health_conditions {
        set.push("health_conditions = ")
            .push_bind_unseparated(Json(conditions.clone().unwrap_or_default()));
    }
    if let Some(level) = &update.privacy_level {
        set.push("privacy_level = ")
            .push_bind_unseparated(level.unwrap_or_default().as_str());
    }
    if let Some(avatar_url) = &update.avatar_url {
        set.push("avatar_url = ").push_bind_unseparated(avatar_url.clone());
    }
    set.push("updated_at = ").push_bind_unseparated(Utc::now());

    builder.push(" WHERE id = ").push_bind(id);
    builder.build().execute(pool).await?;

    get_user_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}
