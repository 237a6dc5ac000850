//! Ports implemented by infrastructure crates

mod notifier;
mod repositories;

pub use notifier::{Notification, Notifier};
pub use repositories::{PostRepository, RepoResult};
