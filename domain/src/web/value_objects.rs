//! Search result value objects

use serde::{Deserialize, Serialize};

/// A single search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    /// Page title from the hit's metadata, if any
    pub title: Option<String>,
    /// Short description/snippet of the page
    pub description: Option<String>,
    /// Page content rendered as markdown, when the service scraped it inline
    pub markdown: Option<String>,
}

impl SearchHit {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    /// Best available short text for the hit: description, then markdown.
    pub fn snippet(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or(self.markdown.as_deref())
            .unwrap_or("")
    }
}

/// Ordered hits for one search call.
///
/// An empty set is the normal "nothing found" answer and also what a failed
/// search degrades to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub data: Vec<SearchHit>,
}

impl ResultSet {
    pub fn new(data: Vec<SearchHit>) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn first(&self) -> Option<&SearchHit> {
        self.data.first()
    }
}

/// A scraped page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub markdown: String,
}

impl Document {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_prefers_description() {
        let hit = SearchHit::new("https://zulip.com")
            .with_description("Open-source team chat")
            .with_markdown("# Zulip\nlong page");
        assert_eq!(hit.snippet(), "Open-source team chat");
    }

    #[test]
    fn test_snippet_falls_back_to_markdown() {
        let hit = SearchHit::new("https://zulip.com")
            .with_description("  ")
            .with_markdown("# Zulip");
        assert_eq!(hit.snippet(), "# Zulip");
        assert_eq!(SearchHit::new("https://x.dev").snippet(), "");
    }
}
