//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod composite_progress;
pub mod llm_gateway;
pub mod progress;
pub mod retrying_web;
pub mod web_search;
