//! News provider trait and supporting types.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::config::Category;
use crate::domain::Article;

/// Errors that can occur while fetching headlines.
///
/// None of these are fatal to a run: the caller treats them as "no news".
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Result type for news operations.
pub type NewsResult<T> = Result<T, NewsError>;

/// Parameters of a headline request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineQuery {
    /// Topic keyword.
    pub category: Category,
    /// Oldest publication date of interest.
    pub from: NaiveDate,
    /// Maximum number of articles to return.
    pub limit: usize,
}

impl HeadlineQuery {
    /// Builds a query covering the day before `today`.
    pub fn for_today(category: Category, limit: usize, today: NaiveDate) -> Self {
        Self {
            category,
            from: today - Duration::days(1),
            limit,
        }
    }

    /// The `from` date as sent on the wire.
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }
}

/// Trait for headline sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetches at most `query.limit` headlines, in the order the source ranks
    /// them.
    async fn fetch_headlines(&self, query: &HeadlineQuery) -> NewsResult<Vec<Article>>;
}
