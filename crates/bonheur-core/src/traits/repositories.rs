//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer states what it needs from storage; `bonheur-db`
//! provides the implementations.

use async_trait::async_trait;

use crate::entities::{Comment, Post};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

/// Storage for posts and their embedded comments
///
/// Both mutations are single atomic updates scoped to one post: concurrent
/// votes or comments on the same post never lose an increment, and an
/// absent post is reported as `Ok(None)` without writing anything.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post (with its comments, oldest first) by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Load every post with its comments, newest post first
    async fn find_all(&self) -> RepoResult<Vec<Post>>;

    /// Persist a newly created post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Atomically add one vote and return the updated post
    async fn increment_votes(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Atomically append a comment to `comment.post_id`, bump its
    /// comment counter and return the updated post
    async fn append_comment(&self, comment: &Comment) -> RepoResult<Option<Post>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
