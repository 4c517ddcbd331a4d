//! Domain layer for toolscout
//!
//! This crate contains the core research logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Research run
//!
//! A run answers one [`Query`] in three fixed stages ([`Stage`]):
//!
//! - **Extract**: discover candidate tool names from web articles
//! - **Research**: look up each candidate and build a [`CompanyRecord`]
//! - **Analyze**: synthesize a short recommendation
//!
//! All state lives in a single [`ResearchState`]; each stage returns a
//! [`StateUpdate`] merged into it.
//!
//! ## Degraded results
//!
//! External calls never abort a run. Components that substitute a default
//! after a failure return an [`Outcome`] flagged as degraded.

pub mod config;
pub mod core;
pub mod prompt;
pub mod research;
pub mod web;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{error::DomainError, outcome::Outcome, query::Query};
pub use prompt::PromptTemplate;
pub use research::{
    CategoryInfo, CompanyAnalysis, CompanyRecord, Extraction, ExtractionRules, PricingModel,
    ResearchState, Stage, StateUpdate,
};
pub use web::{Document, ResultSet, SearchHit, ServiceErrorKind};
