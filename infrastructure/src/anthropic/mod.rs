//! Anthropic Messages API adapter
//!
//! Implements [`LlmGateway`](toolscout_application::LlmGateway). Structured
//! output is obtained by forcing a single tool call whose input schema is
//! the requested schema.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::AnthropicError;
pub use gateway::{AnthropicConfig, AnthropicLlmGateway};
