//! Authentication Module
//!
//! This module handles user identity: the user store, JWT issuance and
//! verification, and the register-or-login resolver.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token signing and validation
//! - **`resolver`** - The idempotent register-or-login operation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── resolver.rs     - Register-or-login logic
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Register-or-login handler
//!     └── me.rs       - Current-user handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: Client submits a username. If the name is unknown a
//!    user row is created; either way a JWT is returned. A username is
//!    both the identifier and the sole credential, so "login" and
//!    "signup" collapse into one idempotent operation.
//! 2. **Authenticated requests**: Client sends `Authorization: Bearer`
//!    on each call; the middleware verifies the token and resolves the
//!    subject against the user store.
//!
//! # Security
//!
//! - Tokens are HMAC-signed JWTs with a fixed TTL (60 minutes by default)
//! - The signing key comes from configuration; the server refuses to
//!   start without one
//! - A token whose subject has been deleted is rejected even before expiry

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Register-or-login resolution
pub mod resolver;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, RegisterRequest};
pub use handlers::{get_me, register, update_me};
pub use sessions::{Claims, TokenSigner};
pub use users::User;
