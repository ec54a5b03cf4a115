//! newsdigest - mail yesterday's top headlines as a plain-text digest
//!
//! One run reads its settings from the environment, fetches headlines from
//! NewsAPI and, if there are any, sends them through an SMTP relay.

pub mod config;
pub mod domain;
pub mod providers;
pub mod services;
pub mod telemetry;

use config::Settings;
use providers::mail::SmtpMailer;
use providers::news::NewsApiProvider;
use services::{DigestService, RunError, RunOutcome};

/// Builds the service from the environment and runs it once.
pub async fn run() -> Result<RunOutcome, RunError> {
    let settings = Settings::from_env()?;
    tracing::info!(
        sender = %settings.sender_email,
        receiver = %settings.receiver_email,
        smtp_server = %settings.smtp_server,
        smtp_port = settings.smtp_port,
        category = %settings.category,
        "Configuration validated successfully"
    );

    let news = NewsApiProvider::new(settings.newsapi_key.clone(), settings.newsapi_url.clone())
        .map_err(|e| RunError::Client(e.to_string()))?;
    let mailer = SmtpMailer::from_settings(&settings)?;

    DigestService::new(settings, Box::new(news), Box::new(mailer))
        .run()
        .await
}
