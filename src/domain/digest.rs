//! The digest: rendered snippets ready to be mailed.

use super::Article;

/// An ordered collection of rendered article snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    snippets: Vec<String>,
}

impl Digest {
    /// Renders at most `limit` articles, keeping input order.
    ///
    /// Returns `None` when there is nothing to render.
    pub fn from_articles(articles: &[Article], limit: usize) -> Option<Self> {
        let snippets: Vec<String> = articles
            .iter()
            .take(limit)
            .enumerate()
            .map(|(idx, article)| article.render_snippet(idx + 1))
            .collect();

        if snippets.is_empty() {
            None
        } else {
            Some(Self { snippets })
        }
    }

    /// The individual snippets, in order.
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    /// Number of articles in the digest.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Always `false` for a digest built by [`Digest::from_articles`].
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// The full digest text.
    pub fn text(&self) -> String {
        self.snippets.join("\n")
    }
}
