//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub author: String,
    pub body: String,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            author: format!("auteur-{suffix}"),
            body: format!("Un rayon de soleil {suffix}"),
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub author: String,
    pub body: String,
}

impl CreateCommentRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            author: format!("lecteur-{suffix}"),
            body: format!("Trop bien {suffix}"),
        }
    }
}

/// Notice attached to responses
#[derive(Debug, Deserialize)]
pub struct Notice {
    pub level: String,
    pub text: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub vote_count: i64,
    pub comment_count: i64,
    pub comments: Vec<CommentResponse>,
}

/// Mutation response
#[derive(Debug, Deserialize)]
pub struct ActionResponse {
    pub data: PostResponse,
    pub notice: Notice,
}

/// Site totals
#[derive(Debug, Deserialize)]
pub struct Totals {
    pub votes: i64,
    pub comments: i64,
}

/// Home page response
#[derive(Debug, Deserialize)]
pub struct HomeResponse {
    pub recent_posts: Vec<PostResponse>,
    pub latest_comments: Vec<CommentResponse>,
    pub totals: Totals,
    pub notice: Option<Notice>,
}

/// Full listing response
#[derive(Debug, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub totals: Totals,
    pub notice: Option<Notice>,
}

/// Abuse report acknowledgement
#[derive(Debug, Deserialize)]
pub struct AbuseReportResponse {
    pub content_ref: String,
    pub notice: Notice,
}
