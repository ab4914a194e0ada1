//! Posts Module
//!
//! Post persistence and the ownership-checked post endpoints.
//!
//! - **`db`** - Post rows, read models (post + author + comments), queries
//! - **`handlers`** - HTTP handlers for `/api/posts`
//!
//! Mutations (update, delete) are allowed only for the post's author;
//! reads are public. Listings are newest-first with the row id as the
//! stable tie-break for identical timestamps.

/// Post queries and read models
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use db::{AuthorSummary, Post, PostView};
pub use handlers::{create_post, delete_post, get_post, list_my_posts, list_posts, update_post};
