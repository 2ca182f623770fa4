//! Configuration types for post-hydrator

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API base URL, matching the local dev server
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9999/api";

/// Client configuration
///
/// Works out of the box with zero configuration: the defaults point at the
/// local dev API and disable request timeouts. All fields have serde
/// defaults so a partial config file deserializes cleanly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash
    /// (default: "http://127.0.0.1:9999/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (None = wait indefinitely, matching the upstream
    /// client's behavior)
    #[serde(default)]
    pub request_timeout: Option<Duration>,

    /// Log response bodies at debug level (default: true)
    #[serde(default = "default_true")]
    pub log_bodies: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: None,
            log_bodies: true,
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// Checks that `base_url` parses as an absolute HTTP(S) URL and does not
    /// end with a trailing slash, since endpoint paths are appended verbatim.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL '{}': {}", self.base_url, e),
            key: Some("base_url".to_string()),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config {
                message: format!(
                    "base URL '{}' must use http or https, got '{}'",
                    self.base_url,
                    parsed.scheme()
                ),
                key: Some("base_url".to_string()),
            });
        }

        if self.base_url.ends_with('/') {
            return Err(Error::Config {
                message: format!(
                    "base URL '{}' must not end with a trailing slash",
                    self.base_url
                ),
                key: Some("base_url".to_string()),
            });
        }

        Ok(())
    }
}
