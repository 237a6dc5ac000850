use std::cmp::Ordering;

use crate::entities::{Comment, Post};
use crate::value_objects::Snowflake;

/// The newest comment of one post, paired with that post's ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestComment {
    pub post_id: Snowflake,
    pub comment: Comment,
}

/// Newest first by creation time; the ID breaks ties
fn newest_first(a: &Comment, b: &Comment) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Select each post's most recent comment, then keep the `limit` newest
pub fn latest_comments(posts: &[Post], limit: usize) -> Vec<LatestComment> {
    let mut latest: Vec<LatestComment> = posts
        .iter()
        .filter_map(|post| {
            post.latest_comment().map(|comment| LatestComment {
                post_id: post.id,
                comment: comment.clone(),
            })
        })
        .collect();

    latest.sort_by(|a, b| newest_first(&a.comment, &b.comment));
    latest.truncate(limit);
    latest
}

/// The `limit` most recently created posts, newest first
pub fn recent_posts(posts: &[Post], limit: usize) -> Vec<Post> {
    let mut recent = posts.to_vec();
    recent.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    recent.truncate(limit);
    recent
}
