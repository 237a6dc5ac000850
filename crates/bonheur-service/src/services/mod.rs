//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and exposes one use
//! case per method.

pub mod abuse;
pub mod context;
pub mod error;
pub mod post;
pub mod report;

// Re-export all services for convenience
pub use abuse::{AbuseService, ABUSE_SUBJECT};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use report::ReportService;
