//! Axum extractors for request handling
//!
//! Custom extractors for path parameters and validated bodies.

mod path;
mod validated;

pub use path::{ContentRefPath, PostIdPath, SnowflakePath};
pub use validated::ValidatedJson;
