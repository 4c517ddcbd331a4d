//! LLM Gateway port
//!
//! Defines the interface for communicating with the language-model service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Named JSON Schema for a structured completion.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    pub name: String,
    pub description: String,
    pub schema: serde_json::Value,
}

impl OutputSchema {
    pub fn new(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            schema,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Single-turn completion returning plain text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError>;

    /// Single-turn completion returning a JSON value matching `schema`.
    async fn complete_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: &OutputSchema,
    ) -> Result<serde_json::Value, GatewayError>;
}

/// Run a structured completion and deserialize the result.
///
/// A value that does not fit `T` is reported as
/// [`GatewayError::MalformedResponse`].
pub async fn complete_as<T: DeserializeOwned>(
    gateway: &dyn LlmGateway,
    system_prompt: &str,
    user_prompt: &str,
    schema: &OutputSchema,
) -> Result<T, GatewayError> {
    let value = gateway
        .complete_structured(system_prompt, user_prompt, schema)
        .await?;
    serde_json::from_value(value).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}
