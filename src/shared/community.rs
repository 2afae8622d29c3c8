/**
 * Community Board Types
 *
 * Communities are named discussion groups (PTSD, chronic pain, ...) and
 * posts are the threads members write inside them. These are the JSON
 * shapes returned by the board endpoints and accepted when creating them.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_max_len, require_non_empty, SharedError};

/// A discussion community
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Topic slug such as `ptsd`, `chronic-pain` or `general-wellness`
    pub category: String,
    pub is_private: bool,
    pub member_count: i64,
    pub created_by: Uuid,
    pub moderators: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Community {
    /// Build a new community owned and moderated by `created_by`
    pub fn new(request: CommunityCreate, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            description: request.description.trim().to_string(),
            category: request.category.trim().to_string(),
            is_private: true,
            member_count: 0,
            created_by,
            moderators: vec![created_by],
            created_at: Utc::now(),
        }
    }
}

/// Body of `POST /api/communities`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityCreate {
    pub name: String,
    pub description: String,
    pub category: String,
}

impl CommunityCreate {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("name", &self.name)?;
        require_max_len("name", &self.name, 100)?;
        require_non_empty("category", &self.category)?;
        require_max_len("category", &self.category, 50)?;
        require_max_len("description", &self.description, 2_000)?;
        Ok(())
    }
}

/// What kind of support a post is asking for or offering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SupportType {
    #[default]
    General,
    SeekingHelp,
    OfferingSupport,
    Milestone,
}

impl SupportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::SeekingHelp => "seeking-help",
            Self::OfferingSupport => "offering-support",
            Self::Milestone => "milestone",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "general" => Some(Self::General),
            "seeking-help" => Some(Self::SeekingHelp),
            "offering-support" => Some(Self::OfferingSupport),
            "milestone" => Some(Self::Milestone),
            _ => None,
        }
    }
}

/// A post inside a community
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub community_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_anonymous: bool,
    pub support_type: SupportType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(community_id: Uuid, author_id: Uuid, request: PostCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            community_id,
            author_id,
            title: request.title.trim().to_string(),
            content: request.content,
            is_anonymous: request.is_anonymous,
            support_type: request.support_type,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /api/communities/{id}/posts`
///
/// The community id comes from the path; a `community_id` field in the body
/// is accepted for compatibility with older clients and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub support_type: SupportType,
}

impl PostCreate {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("title", &self.title)?;
        require_max_len("title", &self.title, 200)?;
        require_non_empty("content", &self.content)?;
        require_max_len("content", &self.content, 10_000)?;
        Ok(())
    }
}
