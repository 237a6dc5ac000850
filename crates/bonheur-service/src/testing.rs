//! Test doubles for the repository and notifier ports

use std::sync::Arc;

use async_trait::async_trait;
use bonheur_core::entities::{Comment, Post};
use bonheur_core::traits::{Notification, Notifier, PostRepository, RepoResult};
use bonheur_core::{DomainError, Snowflake};
use bonheur_db::InMemoryPostRepository;
use parking_lot::Mutex;

use crate::services::{ServiceContext, ServiceContextBuilder};

/// Keeps every notification instead of delivering it
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), DomainError> {
        self.sent.lock().push(notification.clone());
        Ok(())
    }
}

/// Notifier whose relay is always down
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _notification: &Notification) -> Result<(), DomainError> {
        Err(DomainError::NotificationError("relay unreachable".to_string()))
    }
}

/// Repository whose storage is always down
pub struct FailingRepository;

fn storage_down<T>() -> RepoResult<T> {
    Err(DomainError::DatabaseError("connection refused".to_string()))
}

#[async_trait]
impl PostRepository for FailingRepository {
    async fn find_by_id(&self, _id: Snowflake) -> RepoResult<Option<Post>> {
        storage_down()
    }

    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        storage_down()
    }

    async fn create(&self, _post: &Post) -> RepoResult<()> {
        storage_down()
    }

    async fn increment_votes(&self, _id: Snowflake) -> RepoResult<Option<Post>> {
        storage_down()
    }

    async fn append_comment(&self, _comment: &Comment) -> RepoResult<Option<Post>> {
        storage_down()
    }

    async fn ping(&self) -> RepoResult<()> {
        storage_down()
    }
}

pub fn context_with(repo: Arc<dyn PostRepository>, notifier: Arc<dyn Notifier>) -> ServiceContext {
    ServiceContextBuilder::new()
        .post_repo(repo)
        .notifier(notifier)
        .abuse_recipient("moderation@example.com")
        .build()
        .unwrap()
}

pub fn memory_context() -> ServiceContext {
    context_with(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(RecordingNotifier::default()),
    )
}
