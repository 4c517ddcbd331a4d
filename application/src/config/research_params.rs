//! Research parameters — budgets for each pipeline stage.
//!
//! [`ResearchParams`] groups the static limits used by the Extract and
//! Research stages. Tool caps are clamped to the domain maxima, so a
//! misconfigured value can never break the `≤ 5` / `≤ 4` invariants.

use serde::{Deserialize, Serialize};
use toolscout_domain::research::extraction::{MAX_EXTRACTED_TOOLS, MAX_FALLBACK_TOOLS};

/// Most tools researched in one run.
pub const MAX_RESEARCHED_TOOLS: usize = 4;

/// Stage budget parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchParams {
    /// Articles searched for during the Extract stage.
    pub article_count: usize,
    /// Characters kept from each scraped article.
    pub article_char_budget: usize,
    /// Cap on extracted tool names (≤ 5).
    pub max_extracted_tools: usize,
    /// Cap on tools researched (≤ 4).
    pub max_researched_tools: usize,
    /// Cap on fallback suggestions (≤ 4).
    pub max_fallback_tools: usize,
    /// Characters kept from a search snippet as placeholder description.
    pub snippet_char_budget: usize,
    /// Characters of a scraped page sent for analysis.
    pub analysis_char_budget: usize,
}

impl Default for ResearchParams {
    fn default() -> Self {
        Self {
            article_count: 3,
            article_char_budget: 1500,
            max_extracted_tools: MAX_EXTRACTED_TOOLS,
            max_researched_tools: MAX_RESEARCHED_TOOLS,
            max_fallback_tools: MAX_FALLBACK_TOOLS,
            snippet_char_budget: 500,
            analysis_char_budget: 2500,
        }
    }
}

impl ResearchParams {
    // ==================== Builder Methods ====================

    pub fn with_article_count(mut self, count: usize) -> Self {
        self.article_count = count;
        self
    }

    pub fn with_article_char_budget(mut self, chars: usize) -> Self {
        self.article_char_budget = chars;
        self
    }

    pub fn with_max_extracted_tools(mut self, max: usize) -> Self {
        self.max_extracted_tools = max;
        self
    }

    pub fn with_max_researched_tools(mut self, max: usize) -> Self {
        self.max_researched_tools = max;
        self
    }

    pub fn with_max_fallback_tools(mut self, max: usize) -> Self {
        self.max_fallback_tools = max;
        self
    }

    pub fn with_snippet_char_budget(mut self, chars: usize) -> Self {
        self.snippet_char_budget = chars;
        self
    }

    pub fn with_analysis_char_budget(mut self, chars: usize) -> Self {
        self.analysis_char_budget = chars;
        self
    }

    // ==================== Clamped Accessors ====================

    pub fn extracted_cap(&self) -> usize {
        self.max_extracted_tools.min(MAX_EXTRACTED_TOOLS)
    }

    pub fn researched_cap(&self) -> usize {
        self.max_researched_tools.min(MAX_RESEARCHED_TOOLS)
    }

    pub fn fallback_cap(&self) -> usize {
        self.max_fallback_tools.min(MAX_FALLBACK_TOOLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ResearchParams::default();
        assert_eq!(params.article_count, 3);
        assert_eq!(params.article_char_budget, 1500);
        assert_eq!(params.extracted_cap(), 5);
        assert_eq!(params.researched_cap(), 4);
        assert_eq!(params.fallback_cap(), 4);
    }

    #[test]
    fn test_caps_are_clamped() {
        let params = ResearchParams::default()
            .with_max_extracted_tools(10)
            .with_max_researched_tools(9)
            .with_max_fallback_tools(8);
        assert_eq!(params.extracted_cap(), 5);
        assert_eq!(params.researched_cap(), 4);
        assert_eq!(params.fallback_cap(), 4);
    }

    #[test]
    fn test_lower_caps_respected() {
        let params = ResearchParams::default().with_max_researched_tools(2);
        assert_eq!(params.researched_cap(), 2);
    }
}
