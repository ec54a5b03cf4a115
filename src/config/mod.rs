//! Configuration and settings management.
//!
//! Settings are read once per run from the process environment (optionally
//! seeded from a `.env` file by the binary) and validated up front. A run
//! never starts with a partially valid configuration.

mod env_file;
mod settings;

pub use env_file::EnvFile;
pub use settings::{
    Category, ConfigError, Settings, DEFAULT_ARTICLE_LIMIT, DEFAULT_NEWSAPI_URL, REQUIRED_KEYS,
};
