/**
 * Comment Handlers
 *
 * HTTP handler for `POST /api/comments`. Any authenticated user may
 * comment on any existing post; the author id always comes from the
 * authenticated identity.
 *
 * A dangling `postId` is a 404, not a 500: the post's existence is
 * checked before the insert, and a foreign-key violation from a post
 * deleted in between maps to the same error.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;

use crate::comments::db::{self, Comment};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::posts;
use crate::server::state::AppState;

/// Create-comment request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: i64,
    pub content: String,
}

/// `POST /api/comments` - comment on an existing post.
///
/// # Errors
///
/// * `400 Bad Request` - blank content
/// * `404 Not Found` - `postId` does not reference an existing post
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("Content must not be empty"));
    }

    if posts::db::get_post(&state.pool, request.post_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Post not found"));
    }

    let comment =
        match db::insert_comment(&state.pool, user.id, request.post_id, &request.content).await {
            Ok(comment) => comment,
            // The post existed a moment ago but was deleted before the
            // insert landed.
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                return Err(ApiError::not_found("Post not found"));
            }
            Err(e) => return Err(e.into()),
        };

    tracing::info!(
        comment_id = comment.id,
        post_id = request.post_id,
        author_id = user.id,
        "comment created"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}
