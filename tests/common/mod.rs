//! Common test utilities for post-hydrator integration tests
//!
//! `StubApi` wraps a wiremock server and exposes the three feed endpoints
//! with optional per-response delays, so tests can shape both the data and
//! the completion order of concurrent fetches.

use post_hydrator::{ApiClient, Config};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A stub feed API backed by wiremock
///
/// Unstubbed routes answer 404, which doubles as the "author not found"
/// failure case.
pub struct StubApi {
    server: MockServer,
}

#[allow(dead_code)]
impl StubApi {
    /// Start a fresh stub server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// An `ApiClient` pointed at this stub
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&Config {
            base_url: self.server.uri(),
            log_bodies: false,
            ..Default::default()
        })
        .expect("stub config must be valid")
    }

    async fn mount(&self, route: String, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Stub `GET /posts` with the given JSON body
    pub async fn posts(&self, body: Value) {
        self.mount("/posts".to_string(), ok(body, None)).await;
    }

    /// Stub `GET /posts` with a non-2xx status
    pub async fn posts_failing(&self, status: u16) {
        self.mount("/posts".to_string(), ResponseTemplate::new(status))
            .await;
    }

    /// Stub `GET /authors/{id}`
    pub async fn author(&self, id: i64, name: &str) {
        self.author_delayed(id, name, None).await;
    }

    /// Stub `GET /authors/{id}` answering after `delay`
    pub async fn author_delayed(&self, id: i64, name: &str, delay: Option<Duration>) {
        self.mount(
            format!("/authors/{id}"),
            ok(json!({"id": id, "name": name}), delay),
        )
        .await;
    }

    /// Stub `GET /posts/{post_id}/comments`
    pub async fn comments(&self, post_id: i64, body: Value) {
        self.comments_delayed(post_id, body, None).await;
    }

    /// Stub `GET /posts/{post_id}/comments` answering after `delay`
    pub async fn comments_delayed(&self, post_id: i64, body: Value, delay: Option<Duration>) {
        self.mount(format!("/posts/{post_id}/comments"), ok(body, delay))
            .await;
    }
}

fn ok(body: Value, delay: Option<Duration>) -> ResponseTemplate {
    let template = ResponseTemplate::new(200).set_body_json(body);
    match delay {
        Some(delay) => template.set_delay(delay),
        None => template,
    }
}

/// JSON for a post with the wire field names the API uses
#[allow(dead_code)]
pub fn post_json(id: i64, author_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "authorId": author_id,
        "content": content,
        "published": 1_700_000_000 + id,
        "likedByMe": false,
        "likes": 0
    })
}

/// JSON for a comment with the wire field names the API uses
#[allow(dead_code)]
pub fn comment_json(id: i64, post_id: i64, author_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "postId": post_id,
        "authorId": author_id,
        "content": content,
        "published": 1_700_001_000 + id
    })
}
