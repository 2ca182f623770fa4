//! Typed resource client for the feed REST API
//!
//! Thin composition of HTTP fetch and JSON decode: every operation is a
//! single GET, at most once over the wire, with no retries. The underlying
//! `reqwest::Client` connection pool is shared by all clones, so one
//! `ApiClient` can serve any number of concurrent fetches.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Author, AuthorId, Comment, Post, PostId};
use serde::de::DeserializeOwned;

/// Typed client for the posts / authors / comments endpoints
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    log_bodies: bool,
}

impl ApiClient {
    /// Build a client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration fails validation or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| Error::Config {
            message: format!("failed to build HTTP client: {e}"),
            key: None,
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            log_bodies: config.log_bodies,
        })
    }

    /// The base URL this client was configured with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full post list: `GET {base}/posts`
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.get_json(format!("{}/posts", self.base_url)).await
    }

    /// Fetch a single author by id: `GET {base}/authors/{id}`
    ///
    /// An unknown id surfaces as `Error::HttpStatus` with a 404 status.
    pub async fn get_author(&self, id: AuthorId) -> Result<Author> {
        self.get_json(format!("{}/authors/{}", self.base_url, id))
            .await
    }

    /// Fetch the comments of a post: `GET {base}/posts/{id}/comments`
    pub async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        self.get_json(format!("{}/posts/{}/comments", self.base_url, post_id))
            .await
    }

    /// GET a URL and decode its JSON body into `T`
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus { url, status });
        }

        let body = response.bytes().await.map_err(|e| Error::Transport {
            url: url.clone(),
            source: e,
        })?;

        if body.is_empty() {
            return Err(Error::EmptyBody { url });
        }

        if self.log_bodies {
            tracing::debug!(url = %url, body = %String::from_utf8_lossy(&body), "response body");
        }

        serde_json::from_slice(&body).map_err(|e| Error::Decode { url, source: e })
    }
}
