//! Research budgets from TOML (`[research]` section)

use serde::{Deserialize, Serialize};
use toolscout_application::ResearchParams;

/// Raw research configuration from TOML
///
/// Unset fields fall back to [`ResearchParams::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResearchConfig {
    pub article_count: usize,
    pub article_char_budget: usize,
    pub max_extracted_tools: usize,
    pub max_researched_tools: usize,
    pub max_fallback_tools: usize,
    pub snippet_char_budget: usize,
    pub analysis_char_budget: usize,
}

impl Default for FileResearchConfig {
    fn default() -> Self {
        let params = ResearchParams::default();
        Self {
            article_count: params.article_count,
            article_char_budget: params.article_char_budget,
            max_extracted_tools: params.max_extracted_tools,
            max_researched_tools: params.max_researched_tools,
            max_fallback_tools: params.max_fallback_tools,
            snippet_char_budget: params.snippet_char_budget,
            analysis_char_budget: params.analysis_char_budget,
        }
    }
}

impl FileResearchConfig {
    pub fn to_params(&self) -> ResearchParams {
        ResearchParams::default()
            .with_article_count(self.article_count)
            .with_article_char_budget(self.article_char_budget)
            .with_max_extracted_tools(self.max_extracted_tools)
            .with_max_researched_tools(self.max_researched_tools)
            .with_max_fallback_tools(self.max_fallback_tools)
            .with_snippet_char_budget(self.snippet_char_budget)
            .with_analysis_char_budget(self.analysis_char_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_defaults() {
        assert_eq!(FileResearchConfig::default().to_params(), ResearchParams::default());
    }

    #[test]
    fn test_partial_section() {
        let toml_str = r#"
[research]
article_count = 5
"#;
        let config: crate::config::FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.research.to_params();
        assert_eq!(params.article_count, 5);
        assert_eq!(params.article_char_budget, 1500);
    }
}
