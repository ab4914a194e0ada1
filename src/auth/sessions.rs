/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation. The signing key
 * and TTL are process-wide configuration: `TokenSigner` is built once at
 * startup from `Config` and carried in `AppState`. There is no fallback
 * secret; a server without a configured key does not start.
 *
 * Claims are produced only here and consumed only as the typed `Claims`
 * struct, never reconstructed ad hoc at call sites.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::users::User;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: i64,
    /// Username at issuance time
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token verification failure.
///
/// The middleware maps both variants to a 401, but they stay distinct so
/// "expired" and "tampered/garbage" can be told apart in logs, and so
/// neither is confused with "no token presented at all".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Signs and verifies bearer tokens.
///
/// Cheap to clone; both keys are derived from the same HMAC secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenSigner {
    /// Build a signer from the configured secret and token TTL in seconds.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Create a token for a user
    ///
    /// # Returns
    ///
    /// Signed JWT string carrying `{sub, username, iat, exp}`.
    pub fn issue(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// # Errors
    ///
    /// `TokenError::Expired` when the token is past its expiry,
    /// `TokenError::Invalid` for bad signatures or malformed tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
