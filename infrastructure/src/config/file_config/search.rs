//! Web search configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};

/// Firecrawl API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Base URL for the Firecrawl API.
    pub base_url: String,
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.firecrawl.dev".to_string(),
            api_key_env: "FIRECRAWL_API_KEY".to_string(),
            timeout_seconds: 60,
        }
    }
}
