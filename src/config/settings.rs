//! Run settings and their validation.
//!
//! Six environment variables are required. A handful of optional ones tune
//! which headlines are fetched; all of them fall back to sensible defaults.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Environment variables that must be present and non-blank.
pub const REQUIRED_KEYS: [&str; 6] = [
    "SENDER_EMAIL",
    "RECEIVER_EMAIL",
    "SMTP_SERVER",
    "SMTP_PORT",
    "SMTP_PASSWORD",
    "NEWSAPI_KEY",
];

/// Default NewsAPI endpoint.
pub const DEFAULT_NEWSAPI_URL: &str = "https://newsapi.org/v2/top-headlines";

/// Default number of articles included in a digest.
pub const DEFAULT_ARTICLE_LIMIT: usize = 5;

const CATEGORY_KEY: &str = "NEWS_CATEGORY";
const ARTICLE_LIMIT_KEY: &str = "NEWS_ARTICLE_LIMIT";
const NEWSAPI_URL_KEY: &str = "NEWSAPI_URL";

/// Errors raised while building [`Settings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required variables are unset or blank.
    #[error("missing configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// `SMTP_PORT` is not a valid port number.
    #[error("invalid SMTP_PORT value: {0:?}")]
    InvalidPort(String),

    /// `NEWS_CATEGORY` names a category NewsAPI does not know.
    #[error("invalid NEWS_CATEGORY value: {0:?}")]
    InvalidCategory(String),

    /// `NEWS_ARTICLE_LIMIT` is zero or not a number.
    #[error("invalid NEWS_ARTICLE_LIMIT value: {0:?}")]
    InvalidArticleLimit(String),

    /// `NEWSAPI_URL` is not an absolute URL.
    #[error("invalid NEWSAPI_URL value: {0:?}")]
    InvalidUrl(String),
}

/// NewsAPI headline categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    #[default]
    Technology,
}

impl Category {
    /// Query value sent to NewsAPI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    /// Short label used in the email subject and greeting.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::General => "General",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Technology => "Tech",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "business" => Ok(Category::Business),
            "entertainment" => Ok(Category::Entertainment),
            "general" => Ok(Category::General),
            "health" => Ok(Category::Health),
            "science" => Ok(Category::Science),
            "sports" => Ok(Category::Sports),
            "technology" => Ok(Category::Technology),
            _ => Err(ConfigError::InvalidCategory(s.to_string())),
        }
    }
}

/// Validated settings for one run.
///
/// Built through [`Settings::from_env`] or [`Settings::from_lookup`]; once
/// constructed every field is known to be usable.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address the digest is sent from; also the SMTP login.
    pub sender_email: String,
    /// Address the digest is delivered to.
    pub receiver_email: String,
    /// SMTP server hostname.
    pub smtp_server: String,
    /// SMTP server port (implicit TLS, typically 465).
    pub smtp_port: u16,
    /// SMTP password or app-specific password.
    pub smtp_password: String,
    /// NewsAPI key.
    pub newsapi_key: String,
    /// Headline category to fetch.
    pub category: Category,
    /// Maximum number of articles in the digest.
    pub article_limit: usize,
    /// NewsAPI endpoint.
    pub newsapi_url: Url,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Values are trimmed. A key whose value is blank counts as missing. All
    /// missing keys are reported together, in declaration order, before the
    /// port is looked at.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let values = REQUIRED_KEYS.map(|key| value(key));
        let [
            Some(sender_email),
            Some(receiver_email),
            Some(smtp_server),
            Some(raw_port),
            Some(smtp_password),
            Some(newsapi_key),
        ] = values.clone()
        else {
            let missing: Vec<&'static str> = REQUIRED_KEYS
                .iter()
                .zip(&values)
                .filter(|(_, v)| v.is_none())
                .map(|(key, _)| *key)
                .collect();

            tracing::error!("Missing configuration: {}", missing.join(", "));
            return Err(ConfigError::Missing(missing));
        };

        let smtp_port = raw_port.parse::<u16>().map_err(|_| {
            tracing::error!("Invalid SMTP_PORT value");
            ConfigError::InvalidPort(raw_port.clone())
        })?;

        let category = match value(CATEGORY_KEY) {
            Some(raw) => raw.parse::<Category>().map_err(|e| {
                tracing::error!("Invalid NEWS_CATEGORY value");
                e
            })?,
            None => Category::default(),
        };

        let article_limit = match value(ARTICLE_LIMIT_KEY) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    tracing::error!("Invalid NEWS_ARTICLE_LIMIT value");
                    return Err(ConfigError::InvalidArticleLimit(raw));
                }
            },
            None => DEFAULT_ARTICLE_LIMIT,
        };

        let raw_url = value(NEWSAPI_URL_KEY).unwrap_or_else(|| DEFAULT_NEWSAPI_URL.to_string());
        let newsapi_url = Url::parse(&raw_url).map_err(|_| {
            tracing::error!("Invalid NEWSAPI_URL value");
            ConfigError::InvalidUrl(raw_url.clone())
        })?;

        Ok(Self {
            sender_email,
            receiver_email,
            smtp_server,
            smtp_port,
            smtp_password,
            newsapi_key,
            category,
            article_limit,
            newsapi_url,
        })
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("sender_email", &self.sender_email)
            .field("receiver_email", &self.receiver_email)
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_password", &"<redacted>")
            .field("newsapi_key", &"<redacted>")
            .field("category", &self.category)
            .field("article_limit", &self.article_limit)
            .field("newsapi_url", &self.newsapi_url.as_str())
            .finish()
    }
}
