//! HTTP handlers for authentication endpoints
//!
//! - `register` - `POST /api/auth/register`, the register-or-login endpoint
//! - `get_me` / `update_me` - `GET`/`PATCH /api/auth/me`

/// Request/response types
pub mod types;

/// Register-or-login handler
pub mod register;

/// Current-user handlers
pub mod me;

pub use me::{get_me, update_me};
pub use register::register;
