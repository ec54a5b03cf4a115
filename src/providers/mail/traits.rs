//! Mail transport trait definition.

use async_trait::async_trait;

use crate::domain::DigestEmail;

/// Result type alias for mail operations.
pub type MailResult<T> = std::result::Result<T, MailError>;

/// Errors that can occur while sending a digest. All of them end the run.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A sender or recipient address could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The MIME message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// The server rejected the credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The server did not answer in time.
    #[error("timed out: {0}")]
    Timeout(String),

    /// Network, TLS or DNS failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// The server refused the message.
    #[error("send failed: {0}")]
    Send(String),
}

/// Trait for anything that can deliver a [`DigestEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends the email, returning the server's response line for it.
    async fn send(&self, email: &DigestEmail) -> MailResult<String>;
}
