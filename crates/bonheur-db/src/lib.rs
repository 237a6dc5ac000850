//! # bonheur-db
//!
//! Storage layer implementing the post repository port.
//!
//! ## Overview
//!
//! Two interchangeable backends are provided:
//!
//! - [`PgPostRepository`]: PostgreSQL via SQLx, counters updated atomically in SQL
//! - [`InMemoryPostRepository`]: process-local store for development and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bonheur_db::pool::{create_pool, ensure_schema, DatabaseConfig};
//! use bonheur_db::repositories::PgPostRepository;
//! use bonheur_core::traits::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!
//!     let posts = post_repo.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{InMemoryPostRepository, PgPostRepository};
