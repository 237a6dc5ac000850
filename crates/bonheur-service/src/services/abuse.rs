//! Abuse service
//!
//! Forwards "this content is offensive" reports to the moderation mailbox.

use bonheur_core::traits::Notification;
use bonheur_core::require_present;
use tracing::{info, instrument, warn};

use crate::dto::AbuseReportResponse;
use crate::notice::Notice;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Subject line of abuse report emails
pub const ABUSE_SUBJECT: &str = "[instant-de-bonheur] Abuse: un contenu a été signalé comme offensant";

/// Abuse service
pub struct AbuseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AbuseService<'a> {
    /// Create a new AbuseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Report a post or page as offensive
    ///
    /// Delivery is best effort: a failed send is logged and the report is
    /// still acknowledged.
    #[instrument(skip(self))]
    pub async fn report(&self, content_ref: &str) -> ServiceResult<AbuseReportResponse> {
        require_present("content_ref", content_ref)?;
        let content_ref = content_ref.trim();

        let notification =
            Notification::new(self.ctx.abuse_recipient(), ABUSE_SUBJECT, content_ref);

        match self.ctx.notifier().send(&notification).await {
            Ok(()) => info!(content_ref, "Abuse report sent"),
            Err(e) => warn!(content_ref, error = %e, "Abuse report delivery failed"),
        }

        Ok(AbuseReportResponse {
            content_ref: content_ref.to_string(),
            notice: Notice::abuse_reported(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bonheur_db::InMemoryPostRepository;

    use super::*;
    use crate::testing::{context_with, FailingNotifier, RecordingNotifier};

    #[tokio::test]
    async fn test_report_sends_one_notification() {
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context_with(Arc::new(InMemoryPostRepository::new()), notifier.clone());

        let ack = AbuseService::new(&ctx).report("42").await.unwrap();

        assert_eq!(ack.content_ref, "42");
        assert_eq!(ack.notice, Notice::abuse_reported());

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, ctx.abuse_recipient());
        assert_eq!(sent[0].subject, ABUSE_SUBJECT);
        assert_eq!(sent[0].body, "42");
    }

    #[tokio::test]
    async fn test_report_accepts_page_tags() {
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context_with(Arc::new(InMemoryPostRepository::new()), notifier.clone());

        AbuseService::new(&ctx).report("home").await.unwrap();
        assert_eq!(notifier.sent()[0].body, "home");
    }

    #[tokio::test]
    async fn test_report_requires_reference() {
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context_with(Arc::new(InMemoryPostRepository::new()), notifier.clone());

        let err = AbuseService::new(&ctx).report(" ").await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("content_ref"));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_still_acknowledged() {
        let ctx = context_with(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(FailingNotifier),
        );

        let ack = AbuseService::new(&ctx).report("42").await.unwrap();
        assert_eq!(ack.notice, Notice::abuse_reported());
    }
}
