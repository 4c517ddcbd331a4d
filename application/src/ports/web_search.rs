//! Web search port
//!
//! Defines the interface for the external search/scrape service.

use async_trait::async_trait;
use thiserror::Error;
use toolscout_domain::{Document, ResultSet, ServiceErrorKind};

/// Errors reported by a web search/scrape adapter.
///
/// The messages matter: [`WebError::kind`] classifies them by text.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),

    #[error("Service error: {0}")]
    Service(String),
}

impl WebError {
    pub fn kind(&self) -> ServiceErrorKind {
        ServiceErrorKind::classify(&self.to_string())
    }
}

/// Search/scrape service
///
/// Adapters may fail freely; callers go through
/// [`RetryingWebGateway`](super::retrying_web::RetryingWebGateway), which
/// absorbs every failure.
#[async_trait]
pub trait WebSearchPort: Send + Sync {
    /// Search the web, returning at most `limit` hits.
    async fn search(&self, query: &str, limit: usize) -> Result<ResultSet, WebError>;

    /// Fetch one page as markdown. `Ok(None)` means the page had no content.
    async fn scrape(&self, url: &str) -> Result<Option<Document>, WebError>;
}
