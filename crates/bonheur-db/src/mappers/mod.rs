//! Entity to model mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - `*Insert` structs: prepare entity data for binding

mod post;

pub use post::{post_with_comments, CommentInsert, PostInsert};
