//! News article types and snippet rendering.

use serde::{Deserialize, Serialize};

/// Maximum number of characters of a description kept in a snippet.
pub const DESCRIPTION_LIMIT: usize = 200;

const TITLE_FALLBACK: &str = "No title available";
const URL_FALLBACK: &str = "#";
const DIVIDER: &str = "----------------------------------------";

/// A headline as returned by the news API.
///
/// Every field is optional; a JSON `null` is treated the same as an absent
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline text.
    #[serde(default)]
    pub title: Option<String>,
    /// Short summary of the story.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full story.
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    /// Creates an article with all fields set.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            url: Some(url.into()),
        }
    }

    /// Title, or a placeholder when the source did not provide one.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().map(str::trim).unwrap_or(TITLE_FALLBACK)
    }

    /// Description, or an empty string.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().map(str::trim).unwrap_or("")
    }

    /// Link, or `#` when missing.
    pub fn display_url(&self) -> &str {
        self.url.as_deref().map(str::trim).unwrap_or(URL_FALLBACK)
    }

    /// Renders this article as a plain-text snippet.
    ///
    /// `position` is the 1-based rank shown next to the title.
    pub fn render_snippet(&self, position: usize) -> String {
        format!(
            "🔥 {}. {}\n{}\n📖 Read more: {}\n\n{}\n",
            position,
            self.display_title(),
            truncate_description(self.display_description()),
            self.display_url(),
            DIVIDER,
        )
    }
}

/// Cuts `text` to [`DESCRIPTION_LIMIT`] characters, appending `...` only if
/// something was cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
