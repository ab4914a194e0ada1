/**
 * API Error Types
 *
 * This module defines the error type used across HTTP handlers, the auth
 * resolver, and the data layer. Each variant maps to a single HTTP status
 * code; the mapping lives in `status_code` so handlers never pick status
 * codes ad hoc.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by request handlers and the services behind them.
///
/// `Conflict` deserves a note: the auth resolver treats a username
/// uniqueness conflict as "someone else won the registration race" and
/// recovers by re-fetching the row, so under normal operation clients
/// never see a 409 from registration.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (username too short, empty title, ...)
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid, or expired bearer token, or a token whose
    /// subject no longer exists
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Authenticated but not the owner of the target resource
    #[error("{0}")]
    Forbidden(String),

    /// The requested row does not exist
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violation (concurrent duplicate registration)
    #[error("{0}")]
    Conflict(String),

    /// Database failure unrelated to the request's semantics
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token signing failure
    #[error("Token creation failed: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::TokenCreation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to put on the wire.
    ///
    /// Internal failures keep their detail in the log; clients get a
    /// generic message.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::TokenCreation(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
