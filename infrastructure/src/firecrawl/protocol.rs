//! Firecrawl v1 wire types for `/v1/search` and `/v1/scrape`

use serde::{Deserialize, Serialize};
use toolscout_domain::{Document, ResultSet, SearchHit};

const MARKDOWN_FORMATS: &[&str] = &["markdown"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub limit: usize,
    pub scrape_options: ScrapeOptions,
}

#[derive(Debug, Serialize)]
pub struct ScrapeOptions {
    pub formats: &'static [&'static str],
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            formats: MARKDOWN_FORMATS,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: &'static [&'static str],
}

impl<'a> ScrapeRequest<'a> {
    pub fn markdown(url: &'a str) -> Self {
        Self {
            url,
            formats: MARKDOWN_FORMATS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl From<SearchItem> for SearchHit {
    fn from(item: SearchItem) -> Self {
        let metadata = item.metadata.unwrap_or_default();
        SearchHit {
            url: item.url,
            title: item.title.or(metadata.title),
            description: item.description.or(metadata.description),
            markdown: item.markdown,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<SearchItem>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeData {
    #[serde(default)]
    pub markdown: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ScrapeData>,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

impl SearchResponse {
    /// Hits, or the service's own failure message.
    pub fn into_result_set(self) -> Result<ResultSet, String> {
        if !self.success {
            return Err(self.error.unwrap_or_else(|| "search failed".to_string()));
        }
        Ok(ResultSet::new(self.data.into_iter().map(SearchHit::from).collect()))
    }
}

impl ScrapeResponse {
    /// The page, `None` when it had no markdown, or the failure message.
    pub fn into_document(self) -> Result<Option<Document>, String> {
        if !self.success {
            return Err(self.error.unwrap_or_else(|| "scrape failed".to_string()));
        }
        Ok(self
            .data
            .and_then(|d| d.markdown)
            .filter(|md| !md.trim().is_empty())
            .map(Document::new))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Message from an error body, else the status reason.
pub fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_shape() {
        let request = SearchRequest {
            query: "slack tools comparison best alternatives",
            limit: 3,
            scrape_options: ScrapeOptions::default(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "slack tools comparison best alternatives",
                "limit": 3,
                "scrapeOptions": {"formats": ["markdown"]}
            })
        );
    }

    #[test]
    fn test_search_response_titles_from_metadata() {
        let body = r##"{
            "success": true,
            "data": [
                {"url": "https://a.example", "title": "A", "markdown": "# A"},
                {"url": "https://b.example", "metadata": {"title": "B", "description": "About B"}}
            ]
        }"##;
        let set = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_result_set()
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.data[0].title.as_deref(), Some("A"));
        assert_eq!(set.data[1].title.as_deref(), Some("B"));
        assert_eq!(set.data[1].snippet(), "About B");
    }

    #[test]
    fn test_unsuccessful_search() {
        let body = r#"{"success": false, "error": "Rate limit exceeded"}"#;
        let result = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_result_set();
        assert_eq!(result, Err("Rate limit exceeded".to_string()));
    }

    #[test]
    fn test_scrape_response_without_markdown() {
        let body = r#"{"success": true, "data": {"markdown": "   "}}"#;
        let doc = serde_json::from_str::<ScrapeResponse>(body)
            .unwrap()
            .into_document()
            .unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_scrape_response_with_markdown() {
        let body = r#"{"success": true, "data": {"markdown": "Pricing: free"}}"#;
        let doc = serde_json::from_str::<ScrapeResponse>(body)
            .unwrap()
            .into_document()
            .unwrap();
        assert_eq!(doc, Some(Document::new("Pricing: free")));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"error": "Bad key"}"#, Some("Unauthorized")), "Bad key");
        assert_eq!(error_message("<html>", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message(" oops ", None), "oops");
    }
}
