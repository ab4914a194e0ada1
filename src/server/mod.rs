//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! - **`config`** - Environment-driven configuration, validated at startup
//! - **`state`**  - `AppState`, the dependency-injected state container
//! - **`init`**   - Pool construction, migrations, router assembly

/// Configuration loading and validation
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::Config;
pub use state::AppState;
