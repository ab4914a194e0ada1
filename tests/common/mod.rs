//! Shared fixtures for integration tests
//!
//! Tests run against the real router with an in-memory SQLite database
//! migrated to the current schema. The pool is capped at a single
//! connection, which both keeps the in-memory database alive and gives
//! tests deterministic write ordering.

use axum::http::HeaderValue;
use axum_test::TestServer;
use lilypad::auth::sessions::TokenSigner;
use lilypad::routes::router::create_router;
use lilypad::server::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const TEST_SECRET: &str = "integration-test-signing-key";
pub const TEST_TTL_SECS: i64 = 3600;

/// Create a migrated in-memory database pool.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory connect options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// The signer the test server is configured with.
pub fn signer() -> TokenSigner {
    TokenSigner::new(TEST_SECRET, TEST_TTL_SECS)
}

/// Start a test server over the given pool.
pub fn test_server(pool: SqlitePool) -> TestServer {
    let state = AppState::new(pool, signer());
    TestServer::new(create_router(state)).expect("failed to start test server")
}

/// Register (or log in) a username and return `(user_id, token)`.
pub async fn register(server: &TestServer, username: &str) -> (i64, String) {
    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({ "username": username }))
        .await;

    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::OK,
        "registration for {username:?} failed: {}",
        response.text()
    );

    let body: serde_json::Value = response.json();
    let id = body["user"]["id"].as_i64().expect("user id in response");
    let token = body["accessToken"]
        .as_str()
        .expect("accessToken in response")
        .to_string();
    (id, token)
}

/// Authorization header value for a token.
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("bearer header value")
}

/// Row count of a table, for "no row was created" assertions.
pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&query)
        .fetch_one(pool)
        .await
        .expect("count query")
}
