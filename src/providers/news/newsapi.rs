//! NewsAPI (newsapi.org) provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::traits::{HeadlineQuery, NewsError, NewsProvider, NewsResult};
use crate::domain::Article;

/// Timeout applied to the whole headline request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SORT_BY: &str = "popularity";

/// NewsAPI response format.
#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// NewsAPI error response.
#[derive(Debug, Deserialize)]
struct NewsApiError {
    code: Option<String>,
    message: Option<String>,
}

/// Provider for the NewsAPI `top-headlines` endpoint.
pub struct NewsApiProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: Url,
}

impl NewsApiProvider {
    /// Creates a provider with a client that times out after
    /// [`REQUEST_TIMEOUT`].
    pub fn new(api_key: impl Into<String>, endpoint: Url) -> NewsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint,
        })
    }

    /// Overrides the HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn handle_error_response(&self, response: reqwest::Response) -> NewsError {
        let status = response.status().as_u16();

        match response.json::<NewsApiError>().await {
            Ok(NewsApiError {
                message: Some(message),
                ..
            }) => NewsError::Api { status, message },
            Ok(NewsApiError {
                code: Some(code), ..
            }) => NewsError::Api {
                status,
                message: code,
            },
            _ => NewsError::Api {
                status,
                message: format!("HTTP {}", status),
            },
        }
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn fetch_headlines(&self, query: &HeadlineQuery) -> NewsResult<Vec<Article>> {
        let from = query.from_param();

        tracing::debug!(
            category = %query.category,
            from = %from,
            "Requesting top headlines"
        );

        // The API key travels in the query string; keep it out of error text.
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", query.category.as_str()),
                ("from", from.as_str()),
                ("sortBy", SORT_BY),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::Http(e.without_url()))?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let api_response: NewsApiResponse = response.json().await.map_err(|e| {
            NewsError::InvalidResponse(format!("Failed to parse response: {}", e.without_url()))
        })?;

        let mut articles = api_response.articles;
        articles.truncate(query.limit);

        tracing::debug!(count = articles.len(), "Received headlines");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"source": {"id": null, "name": "Example"}, "title": "One", "description": "First", "url": "https://example.com/1"},
                {"title": "Two", "description": null, "url": "https://example.com/2"}
            ]
        }"#;

        let response: NewsApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].title.as_deref(), Some("One"));
        assert_eq!(response.articles[1].description, None);
    }

    #[test]
    fn missing_articles_field_is_empty() {
        let response: NewsApiResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(response.articles.is_empty());
    }

    #[test]
    fn error_body_parsing() {
        let json = r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid."}"#;

        let error: NewsApiError = serde_json::from_str(json).unwrap();
        assert_eq!(error.code.as_deref(), Some("apiKeyInvalid"));
        assert_eq!(error.message.as_deref(), Some("Your API key is invalid."));
    }

    #[test]
    fn provider_creation() {
        let endpoint = Url::parse("https://newsapi.org/v2/top-headlines").unwrap();
        let provider = NewsApiProvider::new("key", endpoint.clone()).unwrap();

        assert_eq!(provider.endpoint(), &endpoint);
    }
}
