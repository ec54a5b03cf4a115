//! Digest service: fetch the headlines, mail the digest.
//!
//! Failures fall into two tiers. A failed or empty headline fetch is routine
//! and ends the run quietly with [`RunOutcome::NothingToSend`]. A
//! configuration or delivery failure is fatal and surfaces as a [`RunError`].

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::config::{ConfigError, Settings};
use crate::domain::{Digest, DigestEmail};
use crate::providers::mail::{MailError, Mailer};
use crate::providers::news::{HeadlineQuery, NewsProvider};

/// Fatal errors that end a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to send email: {0}")]
    Mail(#[from] MailError),

    #[error("failed to set up client: {0}")]
    Client(String),
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The digest was delivered.
    Sent {
        /// Server response for the delivered message.
        message_id: String,
        /// Number of articles in the digest.
        articles: usize,
    },
    /// No headlines were available; no email was sent.
    NothingToSend,
}

/// Coordinates one fetch-and-send run.
pub struct DigestService {
    settings: Settings,
    news: Box<dyn NewsProvider>,
    mailer: Box<dyn Mailer>,
}

impl DigestService {
    /// Creates a new service.
    pub fn new(settings: Settings, news: Box<dyn NewsProvider>, mailer: Box<dyn Mailer>) -> Self {
        Self {
            settings,
            news,
            mailer,
        }
    }

    /// Fetches headlines for the day before `today` and renders them.
    ///
    /// Returns `None` if the request failed or produced no articles. Neither
    /// case is an error for the run.
    pub async fn fetch_digest(&self, today: NaiveDate) -> Option<Digest> {
        let query =
            HeadlineQuery::for_today(self.settings.category, self.settings.article_limit, today);

        let articles = match self.news.fetch_headlines(&query).await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::error!("News API request failed: {}", e);
                return None;
            }
        };

        let digest = Digest::from_articles(&articles, self.settings.article_limit);
        if digest.is_none() {
            tracing::warn!("No articles found in API response");
        }
        digest
    }

    /// Composes and delivers the digest email.
    pub async fn send_digest(&self, digest: &Digest, today: NaiveDate) -> Result<String, RunError> {
        let email = DigestEmail::compose(&self.settings, digest, today);

        self.mailer.send(&email).await.map_err(|e| {
            tracing::error!("Failed to send email: {}", e);
            RunError::Mail(e)
        })
    }

    /// Runs once for the current UTC date.
    pub async fn run(&self) -> Result<RunOutcome, RunError> {
        self.run_for(Utc::now().date_naive()).await
    }

    /// Runs once as if `today` were the current UTC date.
    pub async fn run_for(&self, today: NaiveDate) -> Result<RunOutcome, RunError> {
        let Some(digest) = self.fetch_digest(today).await else {
            tracing::warn!("No news content to send");
            return Ok(RunOutcome::NothingToSend);
        };

        tracing::info!(articles = digest.len(), "Digest ready");
        let message_id = self.send_digest(&digest, today).await?;

        Ok(RunOutcome::Sent {
            message_id,
            articles: digest.len(),
        })
    }
}
