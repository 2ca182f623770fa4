//! Concurrent fan-out/fan-in hydration of the post feed
//!
//! The dependency tree is post -> {author, comments -> comment-author}. The
//! post list is fetched first, then every post gets its own spawned task; in
//! each task the post author and the comment list are fetched concurrently,
//! and every comment's author is fetched concurrently with its siblings.
//!
//! Concurrency is exploited for latency only: the returned `Vec<FullPost>`
//! is in upstream post order, and each post's comments are in upstream
//! comment order, never completion order. The fan-out is unbounded — one
//! task per post, one in-flight fetch per comment — with no throttling,
//! deduplication, or timeout.
//!
//! Failure is all-or-nothing. The first error observed at the join points
//! aborts the run; results of already-completed sibling work are discarded.
//! Spawned per-post tasks are not actively cancelled and run to completion
//! in the background.

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::types::{FullComment, FullPost, Post, PostId};
use futures::future;

/// Fetch the post list and hydrate every post into a [`FullPost`]
///
/// # Errors
///
/// Fails with the first error encountered anywhere in the fetch tree; no
/// partial result is returned.
pub async fn hydrate_feed(client: &ApiClient) -> Result<Vec<FullPost>> {
    let posts = client.list_posts().await?;
    tracing::debug!(count = posts.len(), "fetched post list");

    // One task per post, spawned in list order. Handles are awaited in that
    // same order, so the output is decoupled from completion order.
    let handles: Vec<_> = posts
        .into_iter()
        .map(|post| {
            let client = client.clone();
            tokio::spawn(async move { hydrate_post(&client, post).await })
        })
        .collect();

    let mut feed = Vec::with_capacity(handles.len());
    for handle in handles {
        feed.push(handle.await??);
    }

    tracing::debug!(count = feed.len(), "hydrated feed");
    Ok(feed)
}

/// Hydrate a single post: resolve its author and its comments concurrently
async fn hydrate_post(client: &ApiClient, post: Post) -> Result<FullPost> {
    let (author, comments) = tokio::try_join!(
        client.get_author(post.author_id),
        hydrate_comments(client, post.id),
    )?;

    Ok(FullPost {
        post,
        author,
        comments,
    })
}

/// Fetch a post's comments, then resolve all comment authors concurrently
///
/// `try_join_all` preserves input order, so the returned comments are in the
/// order the comment endpoint produced them.
async fn hydrate_comments(client: &ApiClient, post_id: PostId) -> Result<Vec<FullComment>> {
    let comments = client.list_comments(post_id).await?;

    future::try_join_all(comments.into_iter().map(|comment| async move {
        let author = client.get_author(comment.author_id).await?;
        Ok::<_, Error>(FullComment { comment, author })
    }))
    .await
}
