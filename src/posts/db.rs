//! Database operations for posts
//!
//! Two shapes come out of this module: the flat `Post` row, used for
//! inserts and ownership checks, and `PostView`, the read model with the
//! author summary and nested comments that the list/detail endpoints
//! return.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;

/// A post row as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// The author fields embedded in read models
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// A comment with its author, as embedded in `PostView`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub author: AuthorSummary,
}

/// A post with its author and comments, the shape returned by the read
/// endpoints. Comments are oldest-first for display continuity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub author: AuthorSummary,
    pub comments: Vec<CommentView>,
}

/// Insert a new post for the given author.
pub async fn insert_post(
    pool: &SqlitePool,
    author_id: i64,
    title: &str,
    content: &str,
    category: Option<&str>,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, category, author_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, category, author_id, created_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(category)
    .bind(author_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Fetch a flat post row by id, for ownership checks.
pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, category, author_id, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Apply a full patch (title, content, category) to a post.
///
/// Ownership must already have been checked by the caller.
pub async fn update_post_row(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    content: &str,
    category: Option<&str>,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2, category = $3
        WHERE id = $4
        RETURNING id, title, content, category, author_id, created_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(category)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete a post; the schema cascades to its comments.
pub async fn delete_post_row(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// All posts, newest-first, with authors and comments attached.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<PostView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.title, p.content, p.category, p.author_id, p.created_at,
               u.username, u.avatar_url
        FROM posts p
        JOIN users u ON u.id = p.author_id
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut posts: Vec<PostView> = rows.iter().map(post_view_from_row).collect();
    attach(&mut posts, comments_for_all(pool).await?);
    Ok(posts)
}

/// One author's posts, newest-first, same shape as `list_all`.
pub async fn list_by_author(
    pool: &SqlitePool,
    author_id: i64,
) -> Result<Vec<PostView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.title, p.content, p.category, p.author_id, p.created_at,
               u.username, u.avatar_url
        FROM posts p
        JOIN users u ON u.id = p.author_id
        WHERE p.author_id = $1
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;

    let mut posts: Vec<PostView> = rows.iter().map(post_view_from_row).collect();
    attach(&mut posts, comments_for_author(pool, author_id).await?);
    Ok(posts)
}

/// A single post with author and comments, or `None`.
pub async fn get_one(pool: &SqlitePool, id: i64) -> Result<Option<PostView>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.title, p.content, p.category, p.author_id, p.created_at,
               u.username, u.avatar_url
        FROM posts p
        JOIN users u ON u.id = p.author_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut posts = vec![post_view_from_row(&row)];
    attach(&mut posts, comments_for_post(pool, id).await?);
    Ok(posts.pop())
}

fn post_view_from_row(row: &sqlx::sqlite::SqliteRow) -> PostView {
    PostView {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        category: row.get("category"),
        author_id: row.get("author_id"),
        created_at: row.get("created_at"),
        author: AuthorSummary {
            id: row.get("author_id"),
            username: row.get("username"),
            avatar_url: row.get("avatar_url"),
        },
        comments: Vec::new(),
    }
}

fn comment_view_from_row(row: &sqlx::sqlite::SqliteRow) -> CommentView {
    CommentView {
        id: row.get("id"),
        content: row.get("content"),
        post_id: row.get("post_id"),
        author_id: row.get("author_id"),
        created_at: row.get("created_at"),
        author: AuthorSummary {
            id: row.get("author_id"),
            username: row.get("username"),
            avatar_url: row.get("avatar_url"),
        },
    }
}

/// Distribute comments onto their posts, preserving each query's
/// oldest-first ordering.
fn attach(posts: &mut [PostView], comments: Vec<CommentView>) {
    let mut by_post: HashMap<i64, Vec<CommentView>> = HashMap::new();
    for comment in comments {
        by_post.entry(comment.post_id).or_default().push(comment);
    }
    for post in posts {
        if let Some(comments) = by_post.remove(&post.id) {
            post.comments = comments;
        }
    }
}

async fn comments_for_all(pool: &SqlitePool) -> Result<Vec<CommentView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.content, c.post_id, c.author_id, c.created_at,
               u.username, u.avatar_url
        FROM comments c
        JOIN users u ON u.id = c.author_id
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(comment_view_from_row).collect())
}

async fn comments_for_author(
    pool: &SqlitePool,
    author_id: i64,
) -> Result<Vec<CommentView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.content, c.post_id, c.author_id, c.created_at,
               u.username, u.avatar_url
        FROM comments c
        JOIN users u ON u.id = c.author_id
        JOIN posts p ON p.id = c.post_id
        WHERE p.author_id = $1
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(comment_view_from_row).collect())
}

async fn comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<CommentView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.content, c.post_id, c.author_id, c.created_at,
               u.username, u.avatar_url
        FROM comments c
        JOIN users u ON u.id = c.author_id
        WHERE c.post_id = $1
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(comment_view_from_row).collect())
}
