/**
 * Authentication Middleware
 *
 * This middleware protects routes that require an authenticated user. It
 * extracts the JWT from the Authorization header, verifies it, resolves
 * the subject against the user store, and attaches the resolved user to
 * the request.
 *
 * The middleware is applied only to the authenticated route group in the
 * route table; public routes never pass through it, which is what keeps
 * "no token on a public route" from being an error.
 *
 * Every rejection here is a 401. A token for a user that has since been
 * deleted is rejected like any other stale credential: identity is
 * re-derived from the store on every request, never cached.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::users::{get_user_by_id, User};
use crate::error::ApiError;
use crate::server::state::AppState;

/// The authenticated user attached to a request.
///
/// Handlers take this as an extractor parameter; it is only ever inserted
/// by `require_auth`, so its presence implies the request passed
/// authentication.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Resolves the claims' subject via the user store
/// 4. Attaches the resolved `User` to request extensions
///
/// Returns 401 if any step fails.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header on protected route");
            ApiError::AuthenticationRequired
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::AuthenticationRequired
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "rejected bearer token");
        ApiError::AuthenticationRequired
    })?;

    // The subject must still exist; a deleted account invalidates every
    // token it ever issued.
    let user = get_user_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = claims.sub, "token subject no longer exists");
            ApiError::AuthenticationRequired
        })?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser missing from request extensions");
                ApiError::AuthenticationRequired
            })
    }
}
