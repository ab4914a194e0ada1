/**
 * Server Initialization
 *
 * Builds the pieces of the server in order: database pool, migrations,
 * token signer, application state, router. Everything is constructed
 * here and passed down; failures abort startup rather than degrade into
 * a partially configured server.
 */

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::auth::sessions::TokenSigner;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Open the database pool and bring the schema up to date.
///
/// Foreign keys are enabled on every connection; the cascade behavior and
/// the username uniqueness constraint live in the schema and must be
/// active for the service's invariants to hold.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("database connection pool created");

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("database migrations up to date");

    Ok(pool)
}

/// Create the fully wired application router.
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing lilypad server");

    let pool = connect_database(&config.database_url).await?;
    let tokens = TokenSigner::new(&config.jwt_secret, config.token_ttl_secs);
    let state = AppState::new(pool, tokens);

    Ok(create_router(state))
}
