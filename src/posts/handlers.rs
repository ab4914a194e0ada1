/**
 * Post Handlers
 *
 * HTTP handlers for the post endpoints. Reads (`list_posts`, `get_post`)
 * are public; everything else runs behind the authentication middleware
 * and takes the acting user from the `CurrentUser` extractor, never from
 * the request body.
 *
 * Ownership rule: only a post's author may update or delete it. The
 * check is fetch-then-compare against the authenticated identity, and the
 * post is left untouched when it fails.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::posts::db::{self, Post, PostView};
use crate::server::state::AppState;

/// Minimum accepted title length
const MIN_TITLE_LEN: usize = 5;

/// Create-post request body
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Update-post request body; a full patch of the mutable fields.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
}

fn validate_post_body(title: &str, content: &str) -> Result<(), ApiError> {
    if title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(ApiError::validation(format!(
            "Title must be at least {MIN_TITLE_LEN} characters"
        )));
    }
    if content.trim().is_empty() {
        return Err(ApiError::validation("Content must not be empty"));
    }
    Ok(())
}

/// An empty (or all-whitespace) category means "no category".
fn normalize_category(category: Option<String>) -> Option<String> {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// `POST /api/posts` - create a post as the authenticated user.
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    validate_post_body(&request.title, &request.content)?;
    let category = normalize_category(request.category);

    let post = db::insert_post(
        &state.pool,
        user.id,
        &request.title,
        &request.content,
        category.as_deref(),
    )
    .await?;

    tracing::info!(post_id = post.id, author_id = user.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /api/posts` - public listing, newest-first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostView>>, ApiError> {
    Ok(Json(db::list_all(&state.pool).await?))
}

/// `GET /api/posts/my-posts` - the authenticated user's posts.
pub async fn list_my_posts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<PostView>>, ApiError> {
    Ok(Json(db::list_by_author(&state.pool, user.id).await?))
}

/// `GET /api/posts/{id}` - public post detail.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostView>, ApiError> {
    db::get_one(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Post not found"))
}

/// `PATCH /api/posts/{id}` - update a post the caller owns.
pub async fn update_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    validate_post_body(&request.title, &request.content)?;

    let post = db::get_post(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    if post.author_id != user.id {
        return Err(ApiError::forbidden("You can only edit your own posts"));
    }

    let category = normalize_category(request.category);
    let updated = match db::update_post_row(
        &state.pool,
        id,
        &request.title,
        &request.content,
        category.as_deref(),
    )
    .await
    {
        Ok(post) => post,
        // Deleted between the ownership check and the update.
        Err(sqlx::Error::RowNotFound) => return Err(ApiError::not_found("Post not found")),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(post_id = id, author_id = user.id, "post updated");
    Ok(Json(updated))
}

/// `DELETE /api/posts/{id}` - delete a post the caller owns; comments
/// cascade away with it.
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let post = db::get_post(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    if post.author_id != user.id {
        return Err(ApiError::forbidden("You can only delete your own posts"));
    }

    db::delete_post_row(&state.pool, id).await?;

    tracing::info!(post_id = id, author_id = user.id, "post deleted");
    Ok(Json(serde_json::json!({
        "message": "Post deleted successfully"
    })))
}
