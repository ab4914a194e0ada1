//! Middleware Module
//!
//! HTTP middleware for the server. Currently a single concern:
//!
//! - **`auth`** - Bearer-token authentication for protected routes

pub mod auth;

pub use auth::{require_auth, CurrentUser};
