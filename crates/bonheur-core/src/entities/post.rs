//! Post entity - a shared "instant de bonheur"

use chrono::{DateTime, Utc};

use super::Comment;
use crate::value_objects::Snowflake;

/// A short happiness moment with its votes and comments
///
/// `comments` is kept in chronological (append) order and
/// `comment_count` always equals `comments.len()` once a mutation has
/// been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub vote_count: i64,
    pub comment_count: i64,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new Post with zeroed counters and no comments
    pub fn new(id: Snowflake, author: String, body: String) -> Self {
        Self {
            id,
            author,
            body,
            created_at: Utc::now(),
            vote_count: 0,
            comment_count: 0,
            comments: Vec::new(),
        }
    }

    /// The most recently appended comment, if any
    #[inline]
    pub fn latest_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }

    /// Count one more vote
    pub fn record_vote(&mut self) {
        self.vote_count += 1;
    }

    /// Append a comment and bump the counter in one step
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.comment_count += 1;
    }

    /// Check that `comment_count` matches the comment sequence
    pub fn counters_consistent(&self) -> bool {
        usize::try_from(self.comment_count).is_ok_and(|count| count == self.comments.len())
    }
}
