//! External service implementations.
//!
//! - [`news`] - Headline sources (NewsAPI)
//! - [`mail`] - Mail delivery (SMTP)

pub mod mail;
pub mod news;
