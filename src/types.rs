//! Core types for post-hydrator
//!
//! Wire records mirror the upstream REST API exactly: camelCase field names,
//! epoch-second timestamps, and ids as plain integers. The `Full*` wrappers
//! are assembled locally by the hydrator and are never sent over the wire,
//! but they serialize the same way for display and testing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create a new id from its raw value
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Unique identifier for a post
    PostId
);
id_newtype!(
    /// Unique identifier for an author
    AuthorId
);
id_newtype!(
    /// Unique identifier for a comment
    CommentId
);

/// The kind of media attached to a post
///
/// Closed set; the API currently only ever attaches images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttachmentType {
    /// An image attachment
    Image,
}

/// Media attached to a post
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Where the media lives
    pub url: String,
    /// Human-readable description of the media
    pub description: String,
    /// What kind of media this is
    #[serde(rename = "type")]
    pub kind: AttachmentType,
}

/// A post as returned by `GET {base}/posts`
///
/// Immutable once fetched, except `attachment`, which the API leaves unset
/// and which may be filled in after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post id
    pub id: PostId,
    /// Id of the author who wrote the post
    pub author_id: AuthorId,
    /// Post body text
    pub content: String,
    /// Publish time as epoch seconds
    pub published: i64,
    /// Whether the current user has liked this post
    pub liked_by_me: bool,
    /// Number of likes
    #[serde(default)]
    pub likes: i64,
    /// Optional attached media
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl Post {
    /// Publish time as a UTC datetime, if the epoch value is representable
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.published, 0)
    }
}

/// An author as returned by `GET {base}/authors/{id}`
///
/// The API may carry more display attributes; beyond id and name they are
/// opaque to the hydrator, so only the fields we render are decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Unique author id
    pub id: AuthorId,
    /// Display name
    pub name: String,
    /// Avatar image reference, if the author has one
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A comment as returned by `GET {base}/posts/{id}/comments`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment id
    pub id: CommentId,
    /// Id of the post this comment belongs to
    pub post_id: PostId,
    /// Id of the author who wrote the comment
    pub author_id: AuthorId,
    /// Comment body text
    pub content: String,
    /// Publish time as epoch seconds
    pub published: i64,
}

/// A comment paired with its resolved author
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullComment {
    /// The comment itself
    pub comment: Comment,
    /// The author resolved from `comment.author_id`
    pub author: Author,
}

/// A post paired with its resolved author and hydrated comments
///
/// `comments` preserves the order the upstream comment endpoint returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullPost {
    /// The post itself
    pub post: Post,
    /// The author resolved from `post.author_id`
    pub author: Author,
    /// Hydrated comments in upstream order
    pub comments: Vec<FullComment>,
}
