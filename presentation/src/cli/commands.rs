//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for research results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-tool details and the recommendation
    Full,
    /// The whole research state as JSON
    Json,
}

impl From<OutputFormat> for toolscout_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for toolscout
#[derive(Parser, Debug)]
#[command(name = "toolscout")]
#[command(author, version, about = "Developer tool research - discover, compare and analyze tools")]
#[command(long_about = r#"
toolscout answers questions about developer tools in three stages:

1. Extract:  find comparison articles and pull candidate tool names out of them
2. Research: look up each tool's site and analyze pricing, APIs and integrations
3. Analyze:  write a short recommendation from what was found

Requires ANTHROPIC_API_KEY and FIRECRAWL_API_KEY in the environment.

Configuration files are loaded from (in priority order):
1. TOOLSCOUT_<SECTION>__<KEY>   Environment overrides
2. --config <path>              Explicit config file
3. ./toolscout.toml             Project-level config
4. ~/.config/toolscout/config.toml   Global config

Example:
  toolscout "alternatives to Slack"
  toolscout -o json "vector databases for AI apps"
  toolscout --chat
"#)]
pub struct Cli {
    /// The question to research (not required in chat mode)
    pub query: Option<String>,

    /// Start interactive mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
