//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use toolscout_domain::OutputFormat;

// Re-export OutputFormat from domain for convenience
pub use toolscout_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// The configured format, or the default when unset.
    pub fn format_or_default(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: crate::config::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.color);
    }

    #[test]
    fn test_unset_format_is_full() {
        let config = FileOutputConfig::default();
        assert_eq!(config.format_or_default(), OutputFormat::Full);
    }
}
