//! Anthropic LLM Gateway implementation

use super::error::AnthropicError;
use super::protocol::{
    Message, MessagesRequest, MessagesResponse, Tool, ToolChoice, error_message, tool_input_schema,
};
use crate::config::FileLlmConfig;
use async_trait::async_trait;
use std::time::Duration;
use toolscout_application::{GatewayError, LlmGateway, OutputSchema};
use tracing::debug;

/// Resolved settings for the Messages API.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl AnthropicConfig {
    pub fn from_file(config: &FileLlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

/// LLM Gateway implementation for the Anthropic Messages API
pub struct AnthropicLlmGateway {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicLlmGateway {
    pub fn new(config: AnthropicConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn send(
        &self,
        request: &MessagesRequest<'_>,
    ) -> Result<MessagesResponse, AnthropicError> {
        debug!(model = %self.config.model, "POST {}", self.config.messages_url());
        let response = self
            .client
            .post(self.config.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnthropicError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: MessagesResponse =
            serde_json::from_str(&body).map_err(|e| AnthropicError::Parse(e.to_string()))?;
        debug!(stop_reason = ?parsed.stop_reason, blocks = parsed.content.len(), "Response");
        Ok(parsed)
    }

    fn request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: system_prompt,
            messages: vec![Message::user(user_prompt)],
            tools: Vec::new(),
            tool_choice: None,
        }
    }
}

#[async_trait]
impl LlmGateway for AnthropicLlmGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        let response = self.send(&self.request(system_prompt, user_prompt)).await?;
        let text = response.text();
        if text.trim().is_empty() {
            return Err(AnthropicError::EmptyResponse.into());
        }
        Ok(text)
    }

    async fn complete_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: &OutputSchema,
    ) -> Result<serde_json::Value, GatewayError> {
        let mut request = self.request(system_prompt, user_prompt);
        request.tools = vec![Tool {
            name: &schema.name,
            description: Some(schema.description.as_str()).filter(|d| !d.is_empty()),
            input_schema: tool_input_schema(&schema.schema),
        }];
        request.tool_choice = Some(ToolChoice::tool(&schema.name));

        let response = self.send(&request).await?;
        response
            .into_tool_input(&schema.name)
            .ok_or_else(|| AnthropicError::MissingToolUse(schema.name.clone()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_file() {
        let file = FileLlmConfig {
            base_url: "https://proxy.example/".to_string(),
            ..Default::default()
        };
        let config = AnthropicConfig::from_file(&file, "sk-test");

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "claude-3-5-haiku-latest");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.messages_url(), "https://proxy.example/v1/messages");
    }

    #[test]
    fn test_plain_request_shape() {
        let config = AnthropicConfig::from_file(&FileLlmConfig::default(), "k");
        let gateway = AnthropicLlmGateway::new(config).unwrap();
        let value = serde_json::to_value(gateway.request("sys", "user")).unwrap();

        assert_eq!(value["model"], "claude-3-5-haiku-latest");
        assert_eq!(value["system"], "sys");
        assert_eq!(value["messages"][0]["content"], "user");
        assert!(value.get("tools").is_none());
    }
}
