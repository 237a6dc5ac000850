//! Post and Comment entity <-> model mapper

use bonheur_core::entities::{Comment, Post};
use bonheur_core::value_objects::Snowflake;

use crate::models::{CommentModel, PostModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author: model.author,
            body: model.body,
            created_at: model.created_at,
        }
    }
}

/// Assemble a Post from its row and its comment rows (already in chronological order)
pub fn post_with_comments(model: PostModel, comments: Vec<CommentModel>) -> Post {
    Post {
        id: Snowflake::new(model.id),
        author: model.author,
        body: model.body,
        created_at: model.created_at,
        vote_count: model.vote_count,
        comment_count: model.comment_count,
        comments: comments.into_iter().map(Comment::from).collect(),
    }
}

/// Post values bound on insert
pub struct PostInsert<'a> {
    pub id: i64,
    pub author: &'a str,
    pub body: &'a str,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_inner(),
            author: &post.author,
            body: &post.body,
            created_at: post.created_at,
        }
    }
}

/// Comment values bound on insert
pub struct CommentInsert<'a> {
    pub id: i64,
    pub post_id: i64,
    pub author: &'a str,
    pub body: &'a str,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            post_id: comment.post_id.into_inner(),
            author: &comment.author,
            body: &comment.body,
            created_at: comment.created_at,
        }
    }
}
