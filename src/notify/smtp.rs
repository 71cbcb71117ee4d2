//! SMTP delivery
//!
//! Sends the notification as a single plain-text email over an
//! authenticated STARTTLS session.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use super::composer::Notification;
use super::sink::NotificationSink;
use crate::config::SmtpSettings;
use crate::error::{AlertError, AlertResult};

/// Email sink backed by an SMTP relay
pub struct SmtpSink {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpSink {
    /// Build the transport; no connection is made until delivery
    pub fn new(settings: &SmtpSettings) -> AlertResult<Self> {
        let from = parse_mailbox(&settings.from, "sender")?;
        let to = parse_mailbox(&settings.to, "recipient")?;

        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.as_str().to_string(),
        );
        let transport = SmtpTransport::starttls_relay(&settings.host)
            .map_err(|e| {
                AlertError::Config(format!("Invalid SMTP host '{}': {}", settings.host, e))
            })?
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    /// The email that would be sent for `notification`
    pub fn message(&self, notification: &Notification) -> AlertResult<Message> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| AlertError::Notification(format!("Failed to build email: {}", e)))
    }
}

impl NotificationSink for SmtpSink {
    fn deliver(&self, notification: &Notification) -> AlertResult<()> {
        let message = self.message(notification)?;
        self.transport
            .send(&message)
            .map_err(|e| AlertError::Notification(format!("SMTP delivery failed: {}", e)))?;

        info!(to = %self.to, subject = %notification.subject, "Email sent");
        Ok(())
    }
}

fn parse_mailbox(address: &str, role: &str) -> AlertResult<Mailbox> {
    address
        .parse()
        .map_err(|e| AlertError::Config(format!("Invalid {} address '{}': {}", role, address, e)))
}
