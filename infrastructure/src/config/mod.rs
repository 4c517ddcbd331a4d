//! Configuration file loading for toolscout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `TOOLSCOUT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolscout.toml` or `./.toolscout.toml`
//! 4. Global: `$XDG_CONFIG_HOME/toolscout/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLlmConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig, FileResearchConfig, FileRetryConfig, FileSearchConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
