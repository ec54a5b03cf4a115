//! The outgoing digest email.
//!
//! Composed from the settings and a digest before any transport is involved,
//! so the exact subject and body can be checked without an SMTP server.

use chrono::NaiveDate;

use super::Digest;
use crate::config::Settings;

/// A plain-text email carrying one digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEmail {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl DigestEmail {
    /// Composes the digest email for `today` (a UTC date).
    pub fn compose(settings: &Settings, digest: &Digest, today: NaiveDate) -> Self {
        let label = settings.category.label();

        let subject = format!("📰 Daily {} Digest - {}", label, today.format("%Y-%m-%d"));
        let body = format!(
            "🚀 Your Daily {} News Update\n\n\
             Here are today's top stories:\n\n\
             {}\n\
             Stay informed! 💡\n\
             — Your Own News Bot",
            label,
            digest.text(),
        );

        Self {
            from: settings.sender_email.clone(),
            to: settings.receiver_email.clone(),
            subject,
            body,
        }
    }
}
