//! In-process implementation of PostRepository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, instrument};

use bonheur_core::entities::{Comment, Post};
use bonheur_core::error::DomainError;
use bonheur_core::traits::{PostRepository, RepoResult};
use bonheur_core::value_objects::Snowflake;

/// Post store backed by a sharded concurrent map
///
/// Every mutation runs under the shard write lock of its post, so a vote or
/// a comment on one post never interleaves with another write on that post.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: DashMap<Snowflake, Post>,
}

impl InMemoryPostRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether no post has been stored yet
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        match self.posts.entry(post.id) {
            Entry::Occupied(_) => Err(DomainError::ValidationError(format!(
                "post {} already exists",
                post.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(post.clone());
                debug!(total = self.posts.len(), "Post stored in memory");
                Ok(())
            }
        }
    }

    async fn increment_votes(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.posts.get_mut(&id).map(|mut entry| {
            entry.record_vote();
            entry.value().clone()
        }))
    }

    async fn append_comment(&self, comment: &Comment) -> RepoResult<Option<Post>> {
        Ok(self.posts.get_mut(&comment.post_id).map(|mut entry| {
            entry.push_comment(comment.clone());
            entry.value().clone()
        }))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
