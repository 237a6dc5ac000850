//! # bonheur-core
//!
//! Domain layer for the happiness-moment site: posts, comments, the
//! aggregation step used by listing views, and the ports that storage and
//! notification adapters implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod reporting;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, Post};
pub use error::DomainError;
pub use reporting::{
    latest_comments, recent_posts, LatestComment, Totals, HOME_POST_LIMIT, LATEST_COMMENT_LIMIT,
};
pub use traits::{Notification, Notifier, PostRepository, RepoResult};
pub use validation::require_present;
pub use value_objects::{InvalidWorkerId, Snowflake, SnowflakeGenerator, SnowflakeParseError};
