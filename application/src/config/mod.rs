//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RetryPolicy`] — bounded retry of transient search/scrape failures
//! - [`ResearchParams`] — article, extraction and research budgets

pub mod research_params;
pub mod retry_policy;

pub use research_params::ResearchParams;
pub use retry_policy::RetryPolicy;
