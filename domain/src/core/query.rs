//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The user's research query (Value Object)
///
/// Immutable once a pipeline run starts. Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    content: String,
}

impl Query {
    /// Create a new query
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Query cannot be empty");
        Self { content }
    }

    /// Try to create a new query, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lowercased whitespace-delimited tokens of the query.
    ///
    /// A candidate tool name equal to any of these is treated as an echo
    /// of the query rather than a discovered tool.
    pub fn tokens(&self) -> Vec<String> {
        self.content
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl FromStr for Query {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Query::try_new(s.trim())
            .ok_or_else(|| DomainError::InvalidQuery("query is empty".into()))
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}
