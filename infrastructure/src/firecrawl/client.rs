//! Firecrawl search/scrape client

use super::error::FirecrawlError;
use super::protocol::{
    ScrapeOptions, ScrapeRequest, ScrapeResponse, SearchRequest, SearchResponse, error_message,
};
use crate::config::FileSearchConfig;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use toolscout_application::{WebError, WebSearchPort};
use toolscout_domain::{Document, ResultSet};
use tracing::debug;

/// Resolved settings for the Firecrawl API.
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl FirecrawlConfig {
    pub fn from_file(config: &FileSearchConfig, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }
}

/// [`WebSearchPort`] backed by the Firecrawl v1 API
pub struct FirecrawlClient {
    client: reqwest::Client,
    config: FirecrawlConfig,
}

impl FirecrawlClient {
    pub fn new(config: FirecrawlConfig) -> Result<Self, WebError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WebError::RequestFailed(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, FirecrawlError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(FirecrawlError::Status {
                status: status.as_u16(),
                message: error_message(&text, status.canonical_reason()),
            });
        }
        serde_json::from_str(&text).map_err(|e| FirecrawlError::Parse(e.to_string()))
    }
}

#[async_trait]
impl WebSearchPort for FirecrawlClient {
    async fn search(&self, query: &str, limit: usize) -> Result<ResultSet, WebError> {
        let request = SearchRequest {
            query,
            limit,
            scrape_options: ScrapeOptions::default(),
        };
        let response: SearchResponse = self.post("search", &request).await?;
        let set = response
            .into_result_set()
            .map_err(FirecrawlError::Unsuccessful)?;
        debug!(query, hits = set.len(), "Search complete");
        Ok(set)
    }

    async fn scrape(&self, url: &str) -> Result<Option<Document>, WebError> {
        let response: ScrapeResponse = self.post("scrape", &ScrapeRequest::markdown(url)).await?;
        Ok(response
            .into_document()
            .map_err(FirecrawlError::Unsuccessful)?)
    }
}
