/**
 * Server Configuration
 *
 * Configuration comes from environment variables (optionally via a .env
 * file) and is validated once at startup into a `Config` value that the
 * rest of the server receives explicitly.
 *
 * `JWT_SECRET` is required. Running with a built-in default key would make
 * every deployment's tokens forgeable, so a missing secret is a startup
 * failure, not a warning.
 */

use thiserror::Error;

/// Default token lifetime: 60 minutes.
const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Default listen port, matching the development client's expectation.
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a signing key")]
    MissingJwtSecret,

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection string, e.g. `sqlite://lilypad.db`
    pub database_url: String,
    /// HMAC signing key for bearer tokens (required)
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
    /// TCP port to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// * `MissingJwtSecret` - `JWT_SECRET` unset or blank
    /// * `Invalid` - `TOKEN_TTL_SECS` or `SERVER_PORT` not parseable
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://lilypad.db".to_string());

        let token_ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => raw.parse::<i64>().map_err(|_| ConfigError::Invalid {
                name: "TOKEN_TTL_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            port,
        })
    }
}
