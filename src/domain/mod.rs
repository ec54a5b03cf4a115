//! Domain types for the news digest.
//!
//! Articles as fetched, the digest they are rendered into, and the email that
//! carries it.

mod article;
mod digest;
mod email;

pub use article::{truncate_description, Article, DESCRIPTION_LIMIT};
pub use digest::Digest;
pub use email::DigestEmail;
