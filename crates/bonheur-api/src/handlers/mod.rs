//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod abuse;
pub mod health;
pub mod home;
pub mod posts;
