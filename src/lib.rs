//! # post-hydrator
//!
//! Concurrent feed hydration client: fetches a list of posts from a REST
//! API, then for each post concurrently resolves its author and its
//! comments, and for each comment its author, assembling a fully-hydrated
//! view of the feed.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - the binary is a thin wrapper around the crate
//! - **Fan-out/fan-in** - every independent fetch runs concurrently; joins
//!   preserve upstream order, never completion order
//! - **All-or-nothing** - the first error anywhere in the fetch tree fails
//!   the whole run; no partial feed is ever returned
//!
//! ## Quick Start
//!
//! ```no_run
//! use post_hydrator::{ApiClient, Config, hydrate_feed, presenter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         base_url: "http://127.0.0.1:9999/api".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let client = ApiClient::new(&config)?;
//!     let feed = hydrate_feed(&client).await?;
//!     presenter::print_posts(&feed);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Typed resource client over the REST API
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Concurrent fan-out/fan-in hydration
pub mod hydrator;
/// Human-readable rendering of hydrated posts
pub mod presenter;
/// Core types
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use hydrator::hydrate_feed;
pub use types::{
    Attachment, AttachmentType, Author, AuthorId, Comment, CommentId, FullComment, FullPost, Post,
    PostId,
};
