//! Error types for the Firecrawl adapter

use thiserror::Error;
use toolscout_application::WebError;

/// Errors that can occur when calling the Firecrawl API
#[derive(Error, Debug)]
pub enum FirecrawlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Firecrawl reported failure: {0}")]
    Unsuccessful(String),
}

impl From<FirecrawlError> for WebError {
    fn from(err: FirecrawlError) -> Self {
        match err {
            FirecrawlError::Http(e) => WebError::RequestFailed(e.to_string()),
            FirecrawlError::Status { status, message } => WebError::Status { status, message },
            FirecrawlError::Parse(msg) => WebError::InvalidResponse(msg),
            FirecrawlError::Unsuccessful(msg) => WebError::Service(msg),
        }
    }
}
