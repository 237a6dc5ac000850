//! SMTP implementation of the Notifier port

use std::sync::Arc;

use async_trait::async_trait;
use bonheur_common::MailConfig;
use bonheur_core::traits::{Notification, Notifier};
use bonheur_core::DomainError;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{info, warn};

use crate::services::{ServiceError, ServiceResult};

/// Sends notifications through an SMTP relay
///
/// With no relay host configured the notifier only logs what it would send.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Build the notifier from mail settings
    pub fn new(config: &MailConfig) -> ServiceResult<Self> {
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| ServiceError::internal(format!("Invalid MAIL_FROM address: {e}")))?;

        let transport = if config.smtp_host.trim().is_empty() {
            warn!("SMTP host not configured; notifications will only be logged");
            None
        } else {
            let builder = if config.use_starttls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            }
            .map_err(|e| ServiceError::internal(format!("Failed to configure SMTP transport: {e}")))?
            .port(config.smtp_port);

            let builder = if let (Some(username), Some(password)) =
                (&config.smtp_username, &config.smtp_password)
            {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                builder
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self { transport, from })
    }

    /// Whether a relay is configured
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    fn build_message(&self, notification: &Notification) -> Result<Message, DomainError> {
        let to = notification.recipient.parse::<Mailbox>().map_err(|e| {
            DomainError::NotificationError(format!("Invalid recipient address: {e}"))
        })?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(notification.subject.as_str())
            .header(header::ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| DomainError::NotificationError(format!("Failed to build message: {e}")))
    }
}

impl std::fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("from", &self.from.to_string())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), DomainError> {
        let message = self.build_message(notification)?;

        if let Some(transport) = &self.transport {
            transport
                .send(message)
                .await
                .map_err(|e| DomainError::NotificationError(format!("Failed to send email: {e}")))?;
            info!(subject = %notification.subject, "Email sent");
        } else {
            info!(
                recipient = %notification.recipient,
                subject = %notification.subject,
                body = %notification.body,
                "SMTP disabled; skipping actual send"
            );
        }
        Ok(())
    }
}
