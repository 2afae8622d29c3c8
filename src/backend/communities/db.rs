/**
 * Database Operations for Communities and Posts
 *
 * Rows are decoded into private `*Row` structs and converted into the
 * shared wire types, so list columns (moderators) and enum columns
 * (support type) are parsed in exactly one place.
 */
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{Community, CommunityCreate, Post, SupportType};

/// Communities created when the table is empty: (name, description, category)
pub const DEFAULT_COMMUNITIES: &[(&str, &str, &str)] = &[
    (
        "PTSD Recovery Room",
        "A safe space for PTSD survivors to share experiences and support each other",
        "ptsd",
    ),
    (
        "Chronic Pain Warriors",
        "Support and understanding for those managing chronic pain conditions",
        "chronic-pain",
    ),
    (
        "Cancer Fighters",
        "Community for cancer survivors and those currently fighting cancer",
        "cancer",
    ),
    (
        "General Wellness",
        "Open community for general mental health and wellness support",
        "general-wellness",
    ),
];

#[derive(Debug, sqlx::FromRow)]
struct CommunityRow {
    id: Uuid,
    name: String,
    description: String,
    category: String,
    is_private: bool,
    member_count: i64,
    created_by: Uuid,
    moderators: Json<Vec<Uuid>>,
    created_at: DateTime<Utc>,
}

impl From<CommunityRow> for Community {
    fn from(row: CommunityRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            is_private: row.is_private,
            member_count: row.member_count,
            created_by: row.created_by,
            moderators: row.moderators.0,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    community_id: Uuid,
    author_id: Uuid,
    title: String,
    content: String,
    is_anonymous: bool,
    support_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        let support_type = SupportType::parse(&row.support_type).unwrap_or_else(|| {
            tracing::warn!("Post {} has unknown support type '{}'", row.id, row.support_type);
            SupportType::General
        });
        Self {
            id: row.id,
            community_id: row.community_id,
            author_id: row.author_id,
            title: row.title,
            content: row.content,
            is_anonymous: row.is_anonymous,
            support_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Store a new community
pub async fn insert_community(pool: &SqlitePool, community: &Community) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO communities (id, name, description, category, is_private, member_count,
                                 created_by, moderators, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(community.id)
    .bind(&community.name)
    .bind(&community.description)
    .bind(&community.category)
    .bind(community.is_private)
    .bind(community.member_count)
    .bind(community.created_by)
    .bind(Json(&community.moderators))
    .bind(community.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// List all communities, oldest first
pub async fn list_communities(pool: &SqlitePool) -> Result<Vec<Community>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CommunityRow>(
        r#"
        SELECT id, name, description, category, is_private, member_count,
               created_by, moderators, created_at
        FROM communities
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Community::from).collect())
}

pub async fn community_exists(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM communities WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Store a new post
pub async fn insert_post(pool: &SqlitePool, post: &Post) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO posts (id, community_id, author_id, title, content, is_anonymous,
                           support_type, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(post.id)
    .bind(post.community_id)
    .bind(post.author_id)
    .bind(&post.title)
    .bind(&post.content)
    .bind(post.is_anonymous)
    .bind(post.support_type.as_str())
    .bind(post.created_at)
    .bind(post.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// List the posts of a community, oldest first
pub async fn list_posts(pool: &SqlitePool, community_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, community_id, author_id, title, content, is_anonymous,
               support_type, created_at, updated_at
        FROM posts
        WHERE community_id = ?
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(community_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Post::from).collect())
}

/// Create the default communities if none exist yet
///
/// Returns how many were inserted.
pub async fn seed_default_communities(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM communities")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for (name, description, category) in DEFAULT_COMMUNITIES {
        let community = Community::new(
            CommunityCreate {
                name: name.to_string(),
                description: description.to_string(),
                category: category.to_string(),
            },
            Uuid::nil(),
        );
        sqlx::query(
            r#"
            INSERT INTO communities (id, name, description, category, is_private, member_count,
                                     created_by, moderators, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, '[]', ?)
            "#,
        )
        .bind(community.id)
        .bind(&community.name)
        .bind(&community.description)
        .bind(&community.category)
        .bind(community.is_private)
        .bind(community.member_count)
        .bind(community.created_by)
        .bind(community.created_at)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} default communities", DEFAULT_COMMUNITIES.len());
    Ok(DEFAULT_COMMUNITIES.len())
}
