/**
 * Register-or-Login Handler
 *
 * Implements `POST /api/auth/register`. Despite the name this endpoint is
 * both signup and login: an unknown username creates a user, a known one
 * logs it in, and both paths return a token. It responds 200 rather than
 * 201 for that reason.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::auth::resolver::resolve_or_create;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register-or-login handler
///
/// # Errors
///
/// * `400 Bad Request` - username empty or shorter than 3 characters
/// * `500 Internal Server Error` - database or token signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!(username = %request.username, "register-or-login request");

    let (user, access_token) =
        resolve_or_create(&state.pool, &state.tokens, &request.username).await?;

    Ok(Json(AuthResponse { user, access_token }))
}
