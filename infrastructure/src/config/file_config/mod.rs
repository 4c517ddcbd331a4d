//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod llm;
mod output;
mod repl;
mod research;
mod retry;
mod search;

pub use llm::FileLlmConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use research::FileResearchConfig;
pub use retry::FileRetryConfig;
pub use search::FileSearchConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolscout_application::config::research_params::MAX_RESEARCHED_TOOLS;
use toolscout_domain::research::extraction::{MAX_EXTRACTED_TOOLS, MAX_FALLBACK_TOOLS};

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("llm.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error("{section}.timeout_seconds cannot be 0")]
    InvalidTimeout { section: &'static str },

    #[error("research.article_count must be at least 1")]
    NoArticles,

    #[error("research.{field} must be at least 1")]
    ZeroLimit { field: &'static str },

    #[error("research.{field} is {value}, at most {max} allowed")]
    LimitExceeded {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language-model service
    pub llm: FileLlmConfig,
    /// Search/scrape service
    pub search: FileSearchConfig,
    /// Retry of transient search/scrape failures
    pub retry: FileRetryConfig,
    /// Stage budgets
    pub research: FileResearchConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.llm.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        if self.llm.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout { section: "llm" });
        }
        if self.search.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout { section: "search" });
        }
        if self.research.article_count == 0 {
            return Err(ConfigValidationError::NoArticles);
        }
        let limits = [
            ("max_extracted_tools", self.research.max_extracted_tools, MAX_EXTRACTED_TOOLS),
            ("max_researched_tools", self.research.max_researched_tools, MAX_RESEARCHED_TOOLS),
            ("max_fallback_tools", self.research.max_fallback_tools, MAX_FALLBACK_TOOLS),
        ];
        for (field, value, max) in limits {
            if value == 0 {
                return Err(ConfigValidationError::ZeroLimit { field });
            }
            if value > max {
                return Err(ConfigValidationError::LimitExceeded { field, value, max });
            }
        }
        Ok(())
    }
}
