/**
 * Router Configuration
 *
 * This module assembles the full route table. Visibility is a first-class
 * property of the table: routes live in either the public group or the
 * authenticated group, and the authentication middleware is layered onto
 * the authenticated group as a whole. A new route added without thought
 * lands in the authenticated group; opting out of authentication means
 * moving it to the public group here, in one reviewable place.
 *
 * # Route Table
 *
 * ## Public
 * - `POST /api/auth/register` - register-or-login
 * - `GET  /api/posts`         - list all posts
 * - `GET  /api/posts/{id}`    - post detail
 *
 * ## Authenticated
 * - `GET    /api/auth/me`        - current user
 * - `PATCH  /api/auth/me`        - update avatar
 * - `POST   /api/posts`          - create post
 * - `GET    /api/posts/my-posts` - caller's posts
 * - `PATCH  /api/posts/{id}`     - update own post
 * - `DELETE /api/posts/{id}`     - delete own post
 * - `POST   /api/comments`       - create comment
 */

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::handlers::{get_me, register, update_me};
use crate::comments::handlers::create_comment;
use crate::error::ApiError;
use crate::middleware::auth::require_auth;
use crate::posts::handlers::{
    create_post, delete_post, get_post, list_my_posts, list_posts, update_post,
};
use crate::server::state::AppState;

/// Create the router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // Registration and read-only browsing are the only public surface.
    let public = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post));

    // Everything else requires a verified bearer token.
    let protected = Router::new()
        .route("/api/auth/me", get(get_me).patch(update_me))
        .route("/api/posts", post(create_post))
        .route("/api/posts/my-posts", get(list_my_posts))
        .route("/api/posts/{id}", patch(update_post).delete(delete_post))
        .route("/api/comments", post(create_comment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    public
        .merge(protected)
        .fallback(|| async { ApiError::not_found("No such route") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
