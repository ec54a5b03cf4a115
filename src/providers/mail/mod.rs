//! Mail delivery.
//!
//! This module contains the [`Mailer`] trait and its SMTP implementation,
//! [`SmtpMailer`].

mod smtp;
mod traits;

pub use smtp::{build_message, SmtpMailer, SMTP_TIMEOUT};
pub use traits::{MailError, MailResult, Mailer};

#[cfg(test)]
pub use traits::MockMailer;
