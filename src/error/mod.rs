//! API Error Module
//!
//! This module defines the error types used by HTTP handlers and the
//! conversions that turn them into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers can return
//! `Result<Json<T>, ApiError>` directly. Every error becomes a JSON body of
//! the form `{ "message": "..." }` with the mapped status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
