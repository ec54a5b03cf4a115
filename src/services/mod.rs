//! Business services layer.
//!
//! Services sit between the binary and the providers:
//!
//! ```text
//! main (config, telemetry)
//!          |
//!          v
//!    Services Layer  <-- You are here
//!          |
//!          v
//! Providers (NewsAPI, SMTP)
//! ```

mod digest_service;

pub use digest_service::{DigestService, RunError, RunOutcome};
