//! Use cases
//!
//! One use case per pipeline component, plus the controller that runs them
//! in stage order.

pub mod classify_category;
pub mod extract_tools;
pub mod gather_articles;
pub mod research_tools;
pub mod run_research;
pub mod suggest_fallback;
pub mod synthesize_recommendation;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::ports::retrying_web::WebGateway;
