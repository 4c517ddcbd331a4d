//! Research entities: category hints and per-tool company records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Pricing model of a researched tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PricingModel {
    Free,
    Paid,
    Enterprise,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Free => "Free",
            PricingModel::Paid => "Paid",
            PricingModel::Enterprise => "Enterprise",
            PricingModel::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topical category inferred for a query.
///
/// Produced once per run and read by the tool-name extraction prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: String,
    /// Up to [`CategoryInfo::MAX_EXAMPLES`] example tool names, in order
    pub examples: Vec<String>,
    pub exclude_terms: BTreeSet<String>,
}

impl CategoryInfo {
    pub const MAX_EXAMPLES: usize = 5;
    pub const MAX_EXCLUDE_TERMS: usize = 5;

    pub fn new(
        category: impl Into<String>,
        examples: impl IntoIterator<Item = impl Into<String>>,
        exclude_terms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            category: category.into(),
            examples: examples
                .into_iter()
                .map(Into::into)
                .take(Self::MAX_EXAMPLES)
                .collect(),
            exclude_terms: exclude_terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in category used when classification fails.
    pub fn generic() -> Self {
        Self::new(
            "developer tools, platforms, and services",
            ["Tool1", "Tool2", "Tool3"],
            ["tool", "platform", "service"],
        )
    }
}

impl Default for CategoryInfo {
    fn default() -> Self {
        Self::generic()
    }
}

/// Developer-focused analysis of a tool's website.
///
/// This is the schema requested from the structured model call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyAnalysis {
    /// One of "Free", "Paid", "Enterprise", or "Unknown"
    #[serde(default)]
    pub pricing_model: PricingModel,
    /// true if open source, false if proprietary, null if unclear
    #[serde(default)]
    pub is_open_source: Option<bool>,
    /// Languages, frameworks, databases, APIs or technologies supported/used
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// One-sentence description of what the tool does for developers
    pub description: String,
    /// true if a REST API, GraphQL, SDK or programmatic access is mentioned
    #[serde(default)]
    pub api_available: Option<bool>,
    /// Programming languages explicitly supported
    #[serde(default)]
    pub language_support: Vec<String>,
    /// Tools/platforms it integrates with
    #[serde(default)]
    pub integration_capabilities: Vec<String>,
}

impl CompanyAnalysis {
    /// JSON Schema of this type, for structured-output requests.
    pub fn json_schema() -> serde_json::Value {
        serde_json::Value::from(schemars::schema_for!(CompanyAnalysis))
    }
}

/// Everything learned about one researched tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub description: String,
    pub website: String,
    pub pricing_model: PricingModel,
    pub is_open_source: Option<bool>,
    pub tech_stack: Vec<String>,
    pub api_available: Option<bool>,
    pub language_support: Vec<String>,
    pub integration_capabilities: Vec<String>,
}

impl CompanyRecord {
    /// Seed a record from a search hit, analytic fields left unknown.
    pub fn seeded(
        name: impl Into<String>,
        website: impl Into<String>,
        placeholder_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            description: placeholder_description.into(),
            ..Default::default()
        }
    }

    /// Overwrite the analytic fields with an analysis.
    ///
    /// A blank analysis description keeps the placeholder.
    pub fn apply_analysis(&mut self, analysis: CompanyAnalysis) {
        self.pricing_model = analysis.pricing_model;
        self.is_open_source = analysis.is_open_source;
        self.tech_stack = analysis.tech_stack;
        if !analysis.description.trim().is_empty() {
            self.description = analysis.description;
        }
        self.api_available = analysis.api_available;
        self.language_support = analysis.language_support;
        self.integration_capabilities = analysis.integration_capabilities;
    }
}
