//! Aggregate reporting over the current set of posts
//!
//! Everything here is a pure function of a snapshot returned by the
//! storage collaborator; nothing is cached or materialized.

mod highlights;
mod totals;

pub use highlights::{latest_comments, recent_posts, LatestComment};
pub use totals::Totals;

/// Number of posts shown on the home view
pub const HOME_POST_LIMIT: usize = 3;

/// Number of latest comments shown on the home view
pub const LATEST_COMMENT_LIMIT: usize = 3;
