//! Report service
//!
//! Read-only views over all posts: the home page and the full listing.

use bonheur_core::{latest_comments, recent_posts, Totals, HOME_POST_LIMIT, LATEST_COMMENT_LIMIT};
use tracing::{debug, instrument};

use crate::dto::{CommentResponse, HomeResponse, PostListResponse, PostResponse};
use crate::notice::Notice;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest posts, newest comments and site totals, all from one read
    #[instrument(skip(self))]
    pub async fn home(&self) -> ServiceResult<HomeResponse> {
        let posts = self.ctx.post_repo().find_all().await?;
        debug!(post_count = posts.len(), "Building home view");

        let totals = Totals::from_posts(&posts);
        let notice = posts.is_empty().then(Notice::empty_listing);

        Ok(HomeResponse {
            recent_posts: recent_posts(&posts, HOME_POST_LIMIT)
                .iter()
                .map(PostResponse::from)
                .collect(),
            latest_comments: latest_comments(&posts, LATEST_COMMENT_LIMIT)
                .into_iter()
                .map(CommentResponse::from)
                .collect(),
            totals: totals.into(),
            notice,
        })
    }

    /// Every post, newest first, with site totals
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<PostListResponse> {
        let posts = self.ctx.post_repo().find_all().await?;

        let totals = Totals::from_posts(&posts);
        let notice = posts.is_empty().then(Notice::empty_listing);

        Ok(PostListResponse {
            posts: posts.iter().map(PostResponse::from).collect(),
            totals: totals.into(),
            notice,
        })
    }
}
