/**
 * Application State Management
 *
 * `AppState` is the dependency-injected state container for the server:
 * the database pool and the token signer, both constructed explicitly in
 * `server::init` and handed to the router. Nothing in the crate reaches
 * for ambient globals; services receive their dependencies through this
 * struct.
 *
 * The `FromRef` implementations let handlers extract just the piece they
 * need instead of the whole state.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::TokenSigner;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Bearer token signer/verifier
    pub tokens: TokenSigner,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenSigner) -> Self {
        Self { pool, tokens }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for TokenSigner {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
