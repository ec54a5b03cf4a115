//! SMTP mailer implementation.
//!
//! Sends over implicit TLS ("SMTPS", usually port 465) using `lettre`. The
//! transport is built without a connection pool, so every send opens its own
//! connection, authenticates, delivers and closes it with `QUIT`, whether or
//! not delivery succeeded.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailError, MailResult, Mailer};
use crate::config::Settings;
use crate::domain::DigestEmail;

/// Upper bound on one SMTP session, from connect to `QUIT`.
pub const SMTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Reply codes servers use to reject credentials.
const AUTH_FAILURE_CODES: [&str; 3] = ["530", "534", "535"];

/// Mailer that delivers through an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    timeout: Duration,
}

impl SmtpMailer {
    /// Creates a mailer from validated settings.
    ///
    /// The sender address doubles as the SMTP login. Nothing is contacted
    /// until [`Mailer::send`] is called.
    pub fn from_settings(settings: &Settings) -> MailResult<Self> {
        let credentials = SmtpCredentials::new(
            settings.sender_email.clone(),
            settings.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_server)
            .map_err(|e| MailError::Connection(format!("SMTP relay error: {}", e)))?
            .credentials(credentials)
            .port(settings.smtp_port)
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        tracing::debug!(
            host = %settings.smtp_server,
            port = settings.smtp_port,
            "SMTP transport configured"
        );

        Ok(Self::with_transport(transport))
    }

    /// Wraps an already configured transport.
    pub fn with_transport(transport: AsyncSmtpTransport<Tokio1Executor>) -> Self {
        Self {
            transport,
            timeout: SMTP_TIMEOUT,
        }
    }

    /// Overrides the session timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Builds the MIME message: multipart/mixed with one plain-text part.
pub fn build_message(email: &DigestEmail) -> MailResult<Message> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| MailError::InvalidAddress(format!("invalid from address: {}", e)))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| MailError::InvalidAddress(format!("invalid to address: {}", e)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(&email.subject)
        .multipart(MultiPart::mixed().singlepart(SinglePart::plain(email.body.clone())))
        .map_err(|e| MailError::Build(e.to_string()))
}

fn classify_error(err: lettre::transport::smtp::Error) -> MailError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timed out") || lowered.contains("timeout") {
        return MailError::Timeout(message);
    }

    let auth_code = err
        .status()
        .map(|code| AUTH_FAILURE_CODES.contains(&code.to_string().as_str()))
        .unwrap_or(false);

    if auth_code || lowered.contains("authentication") {
        MailError::Authentication(message)
    } else if err.is_permanent() || err.is_transient() {
        MailError::Send(message)
    } else {
        MailError::Connection(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &DigestEmail) -> MailResult<String> {
        let message = build_message(email)?;

        // lettre's own timeout does not cover waiting for server replies.
        let response = tokio::time::timeout(self.timeout, self.transport.send(message))
            .await
            .map_err(|_| {
                MailError::Timeout(format!(
                    "SMTP session did not finish within {}s",
                    self.timeout.as_secs_f32()
                ))
            })?
            .map_err(classify_error)?;

        let message_id = response
            .message()
            .next()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("<sent-{}>", Utc::now().timestamp()));

        tracing::info!(message_id = %message_id, "Email sent successfully");
        Ok(message_id)
    }
}
