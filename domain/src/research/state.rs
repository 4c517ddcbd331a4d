//! Pipeline state: the stages and the aggregate threaded through them.

use super::entities::CompanyRecord;
use crate::core::query::Query;
use serde::{Deserialize, Serialize};

/// Stage of a research run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Discover candidate tool names from articles
    Extract,
    /// Research each candidate tool
    Research,
    /// Synthesize the final recommendation
    Analyze,
    /// Terminal state
    Done,
}

impl Stage {
    /// The stage that unconditionally follows this one.
    pub fn next(self) -> Stage {
        match self {
            Stage::Extract => Stage::Research,
            Stage::Research => Stage::Analyze,
            Stage::Analyze | Stage::Done => Stage::Done,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Research => "research",
            Stage::Analyze => "analyze",
            Stage::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Extract => "Extracting tools",
            Stage::Research => "Researching tools",
            Stage::Analyze => "Generating recommendations",
            Stage::Done => "Done",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The single mutable aggregate of one research run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchState {
    pub query: Query,
    pub extracted_tools: Vec<String>,
    pub companies: Vec<CompanyRecord>,
    pub analysis: String,
}

impl ResearchState {
    /// Fresh state with only the query populated.
    pub fn new(query: Query) -> Self {
        Self {
            query,
            extracted_tools: Vec::new(),
            companies: Vec::new(),
            analysis: String::new(),
        }
    }

    /// Merge a stage's partial update, overwriting the fields it sets.
    pub fn merge(&mut self, update: StateUpdate) {
        if let Some(tools) = update.extracted_tools {
            self.extracted_tools = tools;
        }
        if let Some(companies) = update.companies {
            self.companies = companies;
        }
        if let Some(analysis) = update.analysis {
            self.analysis = analysis;
        }
    }
}

/// Partial update returned by a stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub extracted_tools: Option<Vec<String>>,
    pub companies: Option<Vec<CompanyRecord>>,
    pub analysis: Option<String>,
}

impl StateUpdate {
    pub fn extracted_tools(tools: Vec<String>) -> Self {
        Self {
            extracted_tools: Some(tools),
            ..Default::default()
        }
    }

    pub fn companies(companies: Vec<CompanyRecord>) -> Self {
        Self {
            companies: Some(companies),
            ..Default::default()
        }
    }

    pub fn analysis(analysis: impl Into<String>) -> Self {
        Self {
            analysis: Some(analysis.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_sequence() {
        let mut stage = Stage::Extract;
        let mut visited = vec![stage];
        while !stage.is_terminal() {
            stage = stage.next();
            visited.push(stage);
        }
        assert_eq!(
            visited,
            vec![Stage::Extract, Stage::Research, Stage::Analyze, Stage::Done]
        );
        assert_eq!(Stage::Done.next(), Stage::Done);
    }

    #[test]
    fn test_new_state_has_only_query() {
        let state = ResearchState::new(Query::new("React alternatives"));
        assert!(state.extracted_tools.is_empty());
        assert!(state.companies.is_empty());
        assert!(state.analysis.is_empty());
    }

    #[test]
    fn test_merge_overwrites_only_set_fields() {
        let mut state = ResearchState::new(Query::new("React alternatives"));
        state.merge(StateUpdate::extracted_tools(vec!["Vue.js".to_string()]));
        state.merge(StateUpdate::analysis("Use Vue."));

        assert_eq!(state.extracted_tools, vec!["Vue.js"]);
        assert_eq!(state.analysis, "Use Vue.");

        state.merge(StateUpdate::extracted_tools(vec!["Svelte".to_string()]));
        assert_eq!(state.extracted_tools, vec!["Svelte"]);
        assert_eq!(state.analysis, "Use Vue.");
    }
}
