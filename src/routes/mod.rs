//! Route Configuration Module
//!
//! Central route table for the server. Every route's visibility (public
//! vs. requires-authentication) is declared here and nowhere else.

/// Main router creation
pub mod router;

pub use router::create_router;
