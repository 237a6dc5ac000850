//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use bonheur_core::entities::{Comment, Post};
use bonheur_core::{LatestComment, Totals};

use super::responses::{CommentResponse, PostResponse, TotalsResponse};

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author: comment.author.clone(),
            body: comment.body.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<LatestComment> for CommentResponse {
    fn from(latest: LatestComment) -> Self {
        Self {
            id: latest.comment.id.to_string(),
            post_id: latest.post_id.to_string(),
            author: latest.comment.author,
            body: latest.comment.body,
            created_at: latest.comment.created_at,
        }
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author: post.author.clone(),
            body: post.body.clone(),
            created_at: post.created_at,
            vote_count: post.vote_count,
            comment_count: post.comment_count,
            comments: post.comments.iter().map(CommentResponse::from).collect(),
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<Totals> for TotalsResponse {
    fn from(totals: Totals) -> Self {
        Self {
            votes: totals.votes,
            comments: totals.comments,
        }
    }
}
