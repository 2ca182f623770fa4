//! Error types for post-hydrator
//!
//! A single crate-level error enum covers every failure mode of a hydration
//! run: transport failures, non-2xx responses, empty bodies, malformed JSON,
//! bad configuration, and panicked hydration tasks. Every error anywhere in
//! the fetch tree aborts the whole run; nothing is retried or aggregated.

use thiserror::Error;

/// Result type alias for post-hydrator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for post-hydrator
///
/// Each variant carries the URL of the request that failed so a single
/// surfaced error pinpoints which fetch in the tree broke.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection failure before a response was received
    #[error("transport error for {url}: {source}")]
    Transport {
        /// The URL that was being fetched
        url: String,
        /// The underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// The URL that was fetched
        url: String,
        /// The non-2xx status returned by the server
        status: reqwest::StatusCode,
    },

    /// The server answered 2xx but the body was empty
    #[error("empty response body from {url}")]
    EmptyBody {
        /// The URL that was fetched
        url: String,
    },

    /// The response body was not valid JSON of the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The URL that was fetched
        url: String,
        /// The underlying serde_json error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// A spawned hydration task panicked or was aborted
    #[error("hydration task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    /// True if this error came back from the server as a 404
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::HttpStatus { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }

    /// The URL of the failed fetch, if this error is tied to one request
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Transport { url, .. }
            | Error::HttpStatus { url, .. }
            | Error::EmptyBody { url }
            | Error::Decode { url, .. } => Some(url),
            Error::Config { .. } | Error::Join(_) => None,
        }
    }
}
