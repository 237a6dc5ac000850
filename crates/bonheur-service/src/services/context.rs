//! Service context - dependency container for services
//!
//! Holds the post repository, the notifier and the ID generator.

use std::sync::Arc;

use bonheur_core::traits::{Notifier, PostRepository};
use bonheur_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every collaborator sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    post_repo: Arc<dyn PostRepository>,
    notifier: Arc<dyn Notifier>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    abuse_recipient: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        notifier: Arc<dyn Notifier>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        abuse_recipient: String,
    ) -> Self {
        Self {
            post_repo,
            notifier,
            snowflake_generator,
            abuse_recipient,
        }
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the outbound notifier
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Address that receives abuse reports
    pub fn abuse_recipient(&self) -> &str {
        &self.abuse_recipient
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("post_repo", &"dyn PostRepository")
            .field("notifier", &"dyn Notifier")
            .field("snowflake_generator", &self.snowflake_generator)
            .field("abuse_recipient", &self.abuse_recipient)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    abuse_recipient: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn abuse_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.abuse_recipient = Some(recipient.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// The ID generator defaults to worker 0 when none is given.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.snowflake_generator.unwrap_or_default(),
            self.abuse_recipient
                .ok_or_else(|| ServiceError::validation("abuse_recipient is required"))?,
        ))
    }
}
