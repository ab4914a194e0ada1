/**
 * Current-User Handlers
 *
 * Handlers for `GET /api/auth/me` and `PATCH /api/auth/me`. Both run
 * behind the authentication middleware, so the acting user arrives via
 * the `CurrentUser` extractor.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UpdateAvatarRequest;
use crate::auth::users::{self, User};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// Return the authenticated user's record.
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// Update the authenticated user's avatar, the only mutable user field.
///
/// An empty or missing `avatarUrl` clears it.
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UpdateAvatarRequest>,
) -> Result<Json<User>, ApiError> {
    let avatar_url = request
        .avatar_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());

    let updated = users::update_avatar(&state.pool, user.id, avatar_url)
        .await?
        // The row can vanish between middleware and handler if the account
        // is deleted mid-request; treat that like any other stale token.
        .ok_or(ApiError::AuthenticationRequired)?;

    tracing::info!(user_id = updated.id, "avatar updated");
    Ok(Json(updated))
}
