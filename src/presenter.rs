//! Human-readable rendering of hydrated posts
//!
//! Purely presentational: one block per post, in feed order, separated by a
//! blank line. Rendering is split from printing so the text itself is
//! testable without capturing stdout.

use crate::types::FullPost;
use std::fmt::Write as _;

/// Render one hydrated post as a displayable block
///
/// First line names the resolved author and shows the post body with its
/// publish time and like count; each comment follows on its own indented
/// line, in upstream order.
pub fn render_post(full: &FullPost) -> String {
    let mut out = String::new();

    let published = full
        .post
        .published_at()
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| full.post.published.to_string());

    let _ = write!(
        out,
        "Post by {}: {} [{}] ({} likes{})",
        full.author.name,
        full.post.content,
        published,
        full.post.likes,
        if full.post.liked_by_me {
            ", liked by me"
        } else {
            ""
        },
    );

    if let Some(attachment) = &full.post.attachment {
        let _ = write!(out, " [attachment: {}]", attachment.url);
    }

    for comment in &full.comments {
        let _ = write!(out, "\n  {}: {}", comment.author.name, comment.comment.content);
    }

    out
}

/// Print every hydrated post to stdout, one blank-separated block per post
pub fn print_posts(feed: &[FullPost]) {
    for full in feed {
        println!();
        println!("{}", render_post(full));
    }
}
