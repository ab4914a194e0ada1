//! Database operations for comments

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// A comment row as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert a comment against an existing post.
///
/// The foreign key on `post_id` is live; callers decide how to surface a
/// violation (the handler maps it to "post not found").
pub async fn insert_comment(
    pool: &SqlitePool,
    author_id: i64,
    post_id: i64,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, post_id, author_id, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, content, post_id, author_id, created_at
        "#,
    )
    .bind(content)
    .bind(post_id)
    .bind(author_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}
