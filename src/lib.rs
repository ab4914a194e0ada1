//! Lilypad - Main Library
//!
//! Lilypad is a minimal discussion board backend: users sign in with just
//! a username, write posts with optional categories, and comment on each
//! other's posts over a REST JSON API.
//!
//! # Module Structure
//!
//! - **`auth`** - User store, JWT sessions, and the register-or-login
//!   resolver. A username is both identifier and credential; there are no
//!   passwords anywhere in the system.
//! - **`posts`** - Post persistence and the ownership-checked post
//!   endpoints (only an author may edit or delete their post).
//! - **`comments`** - Comment persistence and creation endpoint.
//! - **`middleware`** - Bearer-token authentication middleware.
//! - **`routes`** - The central route table; every route's visibility
//!   (public vs. authenticated) is declared there.
//! - **`server`** - Configuration, application state, initialization.
//! - **`error`** - The `ApiError` type and its HTTP mapping.
//!
//! # Usage
//!
//! ```rust,no_run
//! use lilypad::server::{config::Config, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Authentication: users, sessions, register-or-login
pub mod auth;

/// Comments and their endpoint
pub mod comments;

/// Error types and HTTP conversion
pub mod error;

/// Request middleware
pub mod middleware;

/// Posts and their endpoints
pub mod posts;

/// Route table
pub mod routes;

/// Configuration, state, and initialization
pub mod server;
