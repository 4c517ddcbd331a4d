//! Error types for the Anthropic adapter

use thiserror::Error;
use toolscout_application::GatewayError;

/// Errors that can occur when calling the Messages API
#[derive(Error, Debug)]
pub enum AnthropicError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response has no text content")]
    EmptyResponse,

    #[error("Response did not call tool '{0}'")]
    MissingToolUse(String),
}

impl From<AnthropicError> for GatewayError {
    fn from(err: AnthropicError) -> Self {
        match err {
            AnthropicError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            AnthropicError::Http(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            AnthropicError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            err @ AnthropicError::Api { .. } => GatewayError::RequestFailed(err.to_string()),
            err @ (AnthropicError::Parse(_)
            | AnthropicError::EmptyResponse
            | AnthropicError::MissingToolUse(_)) => {
                GatewayError::MalformedResponse(err.to_string())
            }
        }
    }
}
