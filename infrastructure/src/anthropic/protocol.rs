//! Messages API wire types
//!
//! Only the subset used here: one user turn, an optional forced tool call
//! for structured output, text and `tool_use` blocks in the response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: &'a str,
    pub messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> Message<'a> {
    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Tool<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub input_schema: serde_json::Value,
}

/// Forces the model to answer through the named tool.
#[derive(Debug, Serialize)]
pub struct ToolChoice<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'a str,
}

impl<'a> ToolChoice<'a> {
    pub fn tool(name: &'a str) -> Self {
        Self { kind: "tool", name }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ResponseBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBlock {
    Text {
        text: String,
    },
    ToolUse {
        name: String,
        input: serde_json::Value,
    },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    /// All text blocks joined together.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ResponseBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Input of the first call to `tool`, if any.
    pub fn into_tool_input(self, tool: &str) -> Option<serde_json::Value> {
        self.content.into_iter().find_map(|block| match block {
            ResponseBlock::ToolUse { name, input } if name == tool => Some(input),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Best human-readable message for an error body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|r| r.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Prepare a generated JSON Schema for use as a tool `input_schema`.
pub fn tool_input_schema(schema: &serde_json::Value) -> serde_json::Value {
    let mut schema = schema.clone();
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_forced_tool() {
        let request = MessagesRequest {
            model: "claude-3-5-haiku-latest",
            max_tokens: 1024,
            temperature: 0.1,
            system: "sys",
            messages: vec![Message::user("hello")],
            tools: vec![Tool {
                name: "company_analysis",
                description: None,
                input_schema: json!({"type": "object"}),
            }],
            tool_choice: Some(ToolChoice::tool("company_analysis")),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["tool_choice"], json!({"type": "tool", "name": "company_analysis"}));
        assert!(value["tools"][0].get("description").is_none());
    }

    #[test]
    fn test_plain_request_omits_tools() {
        let request = MessagesRequest {
            model: "m",
            max_tokens: 10,
            temperature: 0.0,
            system: "s",
            messages: vec![Message::user("u")],
            tools: Vec::new(),
            tool_choice: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tools").is_none());
        assert!(value.get("tool_choice").is_none());
    }

    #[test]
    fn test_response_text_and_tool_input() {
        let body = r#"{
            "content": [
                {"type": "text", "text": "Hello "},
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "world"},
                {"type": "tool_use", "id": "t1", "name": "company_analysis", "input": {"pricing_model": "Free"}}
            ],
            "stop_reason": "tool_use"
        }"#;
        let response: MessagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), "Hello world");
        assert_eq!(
            response.into_tool_input("company_analysis"),
            Some(json!({"pricing_model": "Free"}))
        );
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(error_message(body), "Overloaded");
        assert_eq!(error_message("  upstream down \n"), "upstream down");
    }

    #[test]
    fn test_tool_input_schema_strips_meta() {
        let schema = json!({"$schema": "https://json-schema.org/draft/2020-12/schema", "type": "object"});
        assert_eq!(tool_input_schema(&schema), json!({"type": "object"}));
    }
}
