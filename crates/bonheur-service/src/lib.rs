//! # bonheur-service
//!
//! Application layer containing the use cases, DTOs, one-shot notices and
//! the SMTP notifier.

pub mod dto;
pub mod mail;
pub mod notice;
pub mod services;

#[cfg(test)]
mod testing;

pub use mail::SmtpNotifier;
pub use notice::{Notice, NoticeLevel};
pub use services::{
    AbuseService, PostService, ReportService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
