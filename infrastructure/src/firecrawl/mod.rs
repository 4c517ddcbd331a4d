//! Firecrawl v1 adapter
//!
//! Implements [`WebSearchPort`](toolscout_application::WebSearchPort).
//! Failures are reported, not absorbed; retry lives in the application
//! layer's retrying gateway.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{FirecrawlClient, FirecrawlConfig};
pub use error::FirecrawlError;
