//! Application layer for toolscout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ResearchParams, RetryPolicy};
pub use ports::{
    composite_progress::CompositeProgressNotifier,
    llm_gateway::{GatewayError, LlmGateway, OutputSchema},
    progress::{NoProgress, ProgressNotifier, TracingProgress},
    retrying_web::{RetryingWebGateway, WebGateway},
    web_search::{WebError, WebSearchPort},
};
pub use use_cases::run_research::RunResearchUseCase;
