//! Post service
//!
//! Handles sharing posts, voting and commenting.

use bonheur_core::entities::{Comment, Post};
use bonheur_core::{require_present, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ActionResponse, CreateCommentRequest, CreatePostRequest, PostResponse};
use crate::notice::Notice;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Share a new post with zeroed counters
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        request: CreatePostRequest,
    ) -> ServiceResult<ActionResponse<PostResponse>> {
        require_present("author", &request.author)?;
        require_present("body", &request.body)?;

        let post = Post::new(
            self.ctx.generate_id(),
            request.author.trim().to_string(),
            request.body.trim().to_string(),
        );
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, "Post shared");

        Ok(ActionResponse::new(
            PostResponse::from(&post),
            Notice::post_shared(),
        ))
    }

    /// Get a post with its comments
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Snowflake) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        Ok(PostResponse::from(post))
    }

    /// Add one vote to a post
    #[instrument(skip(self))]
    pub async fn vote(&self, post_id: Snowflake) -> ServiceResult<ActionResponse<PostResponse>> {
        let post = self
            .ctx
            .post_repo()
            .increment_votes(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        info!(post_id = %post_id, vote_count = post.vote_count, "Vote recorded");

        Ok(ActionResponse::new(
            PostResponse::from(post),
            Notice::vote_recorded(),
        ))
    }

    /// Append a comment to a post
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        post_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<ActionResponse<PostResponse>> {
        require_present("author", &request.author)?;
        require_present("body", &request.body)?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            post_id,
            request.author.trim().to_string(),
            request.body.trim().to_string(),
        );

        let post = self
            .ctx
            .post_repo()
            .append_comment(&comment)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        info!(
            post_id = %post_id,
            comment_id = %comment.id,
            comment_count = post.comment_count,
            "Comment shared"
        );

        Ok(ActionResponse::new(
            PostResponse::from(post),
            Notice::comment_shared(),
        ))
    }
}
