/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Usernames are
 * unique at the schema level; `create_user` translates a unique-constraint
 * violation into `ApiError::Conflict` so the resolver can recover from
 * concurrent duplicate registrations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::ApiError;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique, the sole credential)
    pub username: String,
    /// Optional avatar image URL
    pub avatar_url: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Errors
///
/// Returns `ApiError::Conflict` when the username is already taken, which
/// callers must treat as "someone else won the race" rather than a hard
/// failure.
pub async fn create_user(pool: &SqlitePool, username: &str) -> Result<User, ApiError> {
    let now = Utc::now();

    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, created_at)
        VALUES ($1, $2)
        RETURNING id, username, avatar_url, created_at
        "#,
    )
    .bind(username)
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
            ApiError::conflict(format!("Username '{username}' is already taken")),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Get user by username (exact match, case-sensitive as stored)
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, avatar_url, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, avatar_url, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update a user's avatar URL, the only mutable user field.
///
/// Passing `None` clears the avatar.
pub async fn update_avatar(
    pool: &SqlitePool,
    user_id: i64,
    avatar_url: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET avatar_url = $1
        WHERE id = $2
        RETURNING id, username, avatar_url, created_at
        "#,
    )
    .bind(avatar_url)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
