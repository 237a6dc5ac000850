//! Comment entity - owned by exactly one Post

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A comment appended to a Post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment stamped with the current time
    pub fn new(id: Snowflake, post_id: Snowflake, author: String, body: String) -> Self {
        Self {
            id,
            post_id,
            author,
            body,
            created_at: Utc::now(),
        }
    }
}
