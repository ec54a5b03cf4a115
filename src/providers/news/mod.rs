//! Headline provider implementations.
//!
//! - [`NewsApiProvider`] - NewsAPI `top-headlines`
//!
//! # Example
//!
//! ```rust,no_run
//! use newsdigest::config::Category;
//! use newsdigest::providers::news::{HeadlineQuery, NewsApiProvider, NewsProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = "https://newsapi.org/v2/top-headlines".parse()?;
//! let provider = NewsApiProvider::new("api-key", endpoint)?;
//!
//! let today = chrono::Utc::now().date_naive();
//! let query = HeadlineQuery::for_today(Category::Technology, 5, today);
//! for article in provider.fetch_headlines(&query).await? {
//!     println!("{}", article.display_title());
//! }
//! # Ok(())
//! # }
//! ```

mod newsapi;
mod traits;

pub use newsapi::{NewsApiProvider, REQUEST_TIMEOUT};
pub use traits::{HeadlineQuery, NewsError, NewsProvider, NewsResult};

#[cfg(test)]
pub use traits::MockNewsProvider;
