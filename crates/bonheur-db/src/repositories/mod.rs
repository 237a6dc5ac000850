//! Repository implementations
//!
//! PostgreSQL and in-process implementations of the `PostRepository` port
//! defined in bonheur-core.

mod error;
mod memory;
mod post;

pub use memory::InMemoryPostRepository;
pub use post::PgPostRepository;
