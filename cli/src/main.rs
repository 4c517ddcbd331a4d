//! CLI entrypoint for toolscout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use toolscout_application::{
    CompositeProgressNotifier, NoProgress, ProgressNotifier, RetryingWebGateway,
    RunResearchUseCase, TracingProgress, WebSearchPort,
};
use toolscout_domain::{OutputFormat, Query};
use toolscout_infrastructure::{
    AnthropicConfig, AnthropicLlmGateway, ConfigLoader, FileConfig, FirecrawlClient,
    FirecrawlConfig,
};
use toolscout_presentation::output::set_color_enabled;
use toolscout_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress,
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    info!("Starting toolscout (model: {})", config.llm.model);

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .unwrap_or_else(|| config.output.format_or_default()),
        color: config.output.color && !cli.no_color,
    };
    set_color_enabled(output.color);

    // === Dependency Injection ===
    let use_case = Arc::new(build_use_case(&config)?);

    // Chat mode
    if cli.chat {
        let repl = ReplConfig::default()
            .with_progress(config.repl.show_progress && !cli.quiet)
            .with_history(config.repl.history_path());
        ChatRepl::new(use_case)
            .with_repl_config(repl)
            .with_output_config(output)
            .run()
            .await?;
        return Ok(());
    }

    // Single query mode - query is required
    let Some(raw) = cli.query.as_deref() else {
        bail!("Query is required. Use --chat for interactive mode.");
    };
    let query: Query = raw.parse()?;

    let console: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let mut delegates: Vec<&dyn ProgressNotifier> = vec![console.as_ref()];
    if cli.log_file.is_some() {
        delegates.push(&TracingProgress);
    }
    let progress = CompositeProgressNotifier::new(delegates);

    let state = use_case.execute_with_progress(query, &progress).await;

    let rendered = match output.format {
        OutputFormat::Full => ConsoleFormatter::format(&state),
        OutputFormat::Json => ConsoleFormatter::format_json(&state),
    };
    println!("{}", rendered);

    Ok(())
}

/// Console logging by verbosity (`RUST_LOG` wins when set), plus an
/// optional log file. The returned guard flushes the file on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn api_key(env_var: &str) -> Result<String> {
    std::env::var(env_var).with_context(|| format!("{} is not set", env_var))
}

fn build_use_case(config: &FileConfig) -> Result<RunResearchUseCase> {
    let llm = AnthropicLlmGateway::new(AnthropicConfig::from_file(
        &config.llm,
        api_key(&config.llm.api_key_env)?,
    ))?;

    let search: Arc<dyn WebSearchPort> = Arc::new(FirecrawlClient::new(
        FirecrawlConfig::from_file(&config.search, api_key(&config.search.api_key_env)?),
    )?);
    let web = RetryingWebGateway::new(search).with_policy(config.retry.to_policy());

    Ok(RunResearchUseCase::new(
        Arc::new(llm),
        Arc::new(web),
        config.research.to_params(),
    ))
}
