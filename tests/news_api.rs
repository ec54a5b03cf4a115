//! NewsAPI provider tests (using WireMock)
//! These tests exercise the real HTTP client against a local mock server.

use std::time::Duration;

use chrono::NaiveDate;
use newsdigest::config::Category;
use newsdigest::providers::news::{HeadlineQuery, NewsApiProvider, NewsError, NewsProvider};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key-abc123";

fn create_test_provider(server: &MockServer) -> NewsApiProvider {
    let endpoint = Url::parse(&format!("{}/v2/top-headlines", server.uri())).unwrap();
    NewsApiProvider::new(API_KEY, endpoint).unwrap()
}

fn query() -> HeadlineQuery {
    HeadlineQuery::for_today(
        Category::Technology,
        5,
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
    )
}

fn articles_body(n: usize) -> Value {
    let articles: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "source": {"id": null, "name": "Example"},
                "title": format!("Story {}", i),
                "description": format!("Summary {}", i),
                "url": format!("https://example.com/{}", i),
            })
        })
        .collect();

    json!({"status": "ok", "totalResults": n, "articles": articles})
}

async fn mount_ok(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sends_expected_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(query_param("q", "technology"))
        .and(query_param("from", "2024-03-08"))
        .and(query_param("sortBy", "popularity"))
        .and(query_param("apiKey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server);
    let articles = provider.fetch_headlines(&query()).await.unwrap();

    assert_eq!(articles.len(), 1);
}

#[tokio::test]
async fn test_returns_all_articles_up_to_limit() {
    for n in [1, 3, 5] {
        let mock_server = MockServer::start().await;
        mount_ok(&mock_server, articles_body(n)).await;

        let provider = create_test_provider(&mock_server);
        let articles = provider.fetch_headlines(&query()).await.unwrap();

        assert_eq!(articles.len(), n);
    }
}

#[tokio::test]
async fn test_keeps_first_five_in_order() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, articles_body(12)).await;

    let provider = create_test_provider(&mock_server);
    let articles = provider.fetch_headlines(&query()).await.unwrap();

    let titles: Vec<&str> = articles.iter().map(|a| a.display_title()).collect();
    assert_eq!(
        titles,
        vec!["Story 1", "Story 2", "Story 3", "Story 4", "Story 5"]
    );
}

#[tokio::test]
async fn test_empty_articles() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        json!({"status": "ok", "totalResults": 0, "articles": []}),
    )
    .await;

    let provider = create_test_provider(&mock_server);
    let articles = provider.fetch_headlines(&query()).await.unwrap();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_missing_fields_are_tolerated() {
    let mock_server = MockServer::start().await;
    mount_ok(
        &mock_server,
        json!({"status": "ok", "articles": [{"title": null}, {}]}),
    )
    .await;

    let provider = create_test_provider(&mock_server);
    let articles = provider.fetch_headlines(&query()).await.unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].display_title(), "No title available");
    assert_eq!(articles[1].display_url(), "#");
}

#[tokio::test]
async fn test_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server);
    let result = provider.fetch_headlines(&query()).await;

    assert!(matches!(result, Err(NewsError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server);
    let err = provider.fetch_headlines(&query()).await.unwrap_err();

    match err {
        NewsError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Your API key is invalid or incorrect.");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server);
    let result = provider.fetch_headlines(&query()).await;

    assert!(matches!(result, Err(NewsError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_timeout_does_not_leak_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(articles_body(1))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let provider = create_test_provider(&mock_server).with_client(client);

    let err = provider.fetch_headlines(&query()).await.unwrap_err();

    match &err {
        NewsError::Http(e) => assert!(e.is_timeout()),
        other => panic!("Expected Http error, got {:?}", other),
    }
    assert!(!err.to_string().contains(API_KEY));
}
