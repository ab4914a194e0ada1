/**
 * Authentication Handler Types
 *
 * Request and response types for the authentication endpoints. All wire
 * types serialize as camelCase to match the client contract.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Register-or-login request
///
/// The username is the sole credential; there is no password field by
/// design.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// Requested username (minimum 3 characters)
    pub username: String,
}

/// Register-or-login response
///
/// Contains the user record (created or found) and a freshly issued
/// access token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The resolved user
    pub user: User,
    /// Bearer token for subsequent requests
    pub access_token: String,
}

/// Avatar update request for `PATCH /api/auth/me`
///
/// A missing or empty `avatarUrl` clears the avatar.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvatarRequest {
    #[serde(default)]
    pub avatar_url: Option<String>,
}
