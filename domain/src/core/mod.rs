//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`] — the validated user query driving one research run
//! - [`outcome::Outcome`] — a value tagged with whether it came from a fallback
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod outcome;
pub mod query;
pub mod string;
