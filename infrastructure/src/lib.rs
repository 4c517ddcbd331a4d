//! Infrastructure layer for toolscout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod anthropic;
pub mod config;
pub mod firecrawl;

// Re-export commonly used types
pub use anthropic::{AnthropicConfig, AnthropicError, AnthropicLlmGateway};
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLlmConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, FileResearchConfig, FileRetryConfig, FileSearchConfig,
};
pub use firecrawl::{FirecrawlClient, FirecrawlConfig, FirecrawlError};
