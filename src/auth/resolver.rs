/**
 * Register-or-Login Resolution
 *
 * A username is both the identifier and the sole credential, so "login"
 * and "signup" collapse into one idempotent operation: resolve the
 * username to a user row, creating it if absent, then issue a token.
 *
 * Correctness under concurrent identical requests does not rely on
 * check-then-create: the store's unique constraint is the arbiter, and a
 * create that loses the race falls back to re-fetching the winner's row
 * and logging in against it.
 */

use sqlx::SqlitePool;

use crate::auth::sessions::TokenSigner;
use crate::auth::users::{self, User};
use crate::error::ApiError;

/// Minimum accepted username length
pub const MIN_USERNAME_LEN: usize = 3;

/// Validate a username, returning the trimmed form on success.
pub fn validate_username(username: &str) -> Result<&str, ApiError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Username must not be empty"));
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ApiError::validation(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    Ok(username)
}

/// Resolve a username to a user, creating the row if needed, and issue a
/// token for it.
///
/// # Errors
///
/// * `ApiError::Validation` - username empty or shorter than 3 characters
/// * `ApiError::Database` - store failure unrelated to uniqueness
///
/// A uniqueness conflict from the create path is handled internally and
/// never surfaced to the caller.
pub async fn resolve_or_create(
    pool: &SqlitePool,
    signer: &TokenSigner,
    username: &str,
) -> Result<(User, String), ApiError> {
    let username = validate_username(username)?;

    if let Some(user) = users::get_user_by_username(pool, username).await? {
        tracing::debug!(username, "known username, logging in");
        let token = signer.issue(&user)?;
        return Ok((user, token));
    }

    let user = match users::create_user(pool, username).await {
        Ok(user) => {
            tracing::info!(username, user_id = user.id, "created new user");
            user
        }
        Err(ApiError::Conflict(_)) => {
            // Lost a concurrent registration race; the winner's row exists
            // now, so proceed as a login.
            tracing::debug!(username, "registration race lost, re-fetching");
            users::get_user_by_username(pool, username)
                .await?
                .ok_or_else(|| {
                    ApiError::conflict(format!(
                        "Username '{username}' was taken and released mid-registration"
                    ))
                })?
        }
        Err(e) => return Err(e),
    };

    let token = signer.issue(&user)?;
    Ok((user, token))
}
