use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::EmailConfig;

/// A single outbound email, fully addressed and ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub reply_to: Option<String>,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Narrow mail-sending capability the contact relay depends on.
///
/// "Accepted" means the provider took the message, not that it was
/// delivered. Tests substitute this with a recording implementation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<()>;
}

/// SMTP-backed mailer using lettre.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let transport = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            // relay() uses STARTTLS, appropriate for port 587
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );

            SmtpTransport::relay(&config.smtp_host)
                .context("Failed to create SMTP transport")?
                .port(config.smtp_port)
                .credentials(credentials)
                .build()
        };

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<()> {
        let from: Mailbox = email.from.parse().context("Failed to parse from address")?;
        let to: Mailbox = email.to.parse().context("Failed to parse to address")?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_to) = email.reply_to {
            let reply_to: Mailbox = reply_to
                .parse()
                .context("Failed to parse reply-to address")?;
            builder = builder.reply_to(reply_to);
        }

        let message = builder
            .body(email.body)
            .context("Failed to build email message")?;

        self.transport
            .send(&message)
            .context("Mail provider rejected the message")?;

        Ok(())
    }
}
