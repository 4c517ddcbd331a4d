//! Research tools use case.
//!
//! For each candidate name, strictly one after another:
//!
//! 1. search `"<name> official documentation pricing"` (limit 1)
//! 2. no hit: skip the tool, no record
//! 3. seed a [`CompanyRecord`] from the hit (URL + snippet)
//! 4. scrape the page and run a structured analysis over it
//! 5. scrape or analysis failure: keep the seeded record as is
//!
//! The web gateway never fails and analysis errors are caught per tool, so
//! one tool cannot stop the others from being researched.

use crate::config::ResearchParams;
use crate::ports::llm_gateway::{LlmGateway, OutputSchema, complete_as};
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::WebGateway;
use std::sync::Arc;
use toolscout_domain::core::string::take_chars;
use toolscout_domain::research::PLACEHOLDER_TOOL_NAME;
use toolscout_domain::{CompanyAnalysis, CompanyRecord, PromptTemplate, Query};
use tracing::{debug, info, warn};

/// Appended to a tool name when looking up its official site.
pub const TOOL_QUERY_SUFFIX: &str = "official documentation pricing";

/// Schema name for the structured analysis call.
const ANALYSIS_SCHEMA_NAME: &str = "company_analysis";

pub fn tool_query(name: &str) -> String {
    format!("{} {}", name, TOOL_QUERY_SUFFIX)
}

/// Use case for building a [`CompanyRecord`] per candidate tool.
pub struct ResearchToolsUseCase {
    gateway: Arc<dyn LlmGateway>,
    web: Arc<WebGateway>,
    params: ResearchParams,
    schema: OutputSchema,
}

impl ResearchToolsUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        web: Arc<WebGateway>,
        params: ResearchParams,
    ) -> Self {
        let schema = OutputSchema::new(ANALYSIS_SCHEMA_NAME, CompanyAnalysis::json_schema())
            .with_description("Developer-focused analysis of a tool's website");
        Self {
            gateway,
            web,
            params,
            schema,
        }
    }

    /// Research up to the configured number of tools, in input order.
    ///
    /// An empty `tools` list falls back to titles from a direct search
    /// over the query.
    pub async fn execute(
        &self,
        query: &Query,
        tools: &[String],
        progress: &dyn ProgressNotifier,
    ) -> Vec<CompanyRecord> {
        let cap = self.params.researched_cap();
        let names: Vec<String> = if tools.is_empty() {
            warn!("No tool names to research, searching the query directly");
            self.direct_search_names(query, cap).await
        } else {
            tools.iter().take(cap).cloned().collect()
        };

        let total = names.len();
        let mut companies = Vec::with_capacity(total);
        for (index, name) in names.iter().enumerate() {
            progress.on_tool_start(name, index, total);
            match self.research_one(name).await {
                Some(record) => {
                    progress.on_tool_complete(name, true);
                    companies.push(record);
                }
                None => {
                    progress.on_tool_complete(name, false);
                    progress.on_warning(&format!("No results for {}, skipped", name));
                }
            }
        }

        info!("Researched {} of {} tools", companies.len(), total);
        companies
    }

    async fn direct_search_names(&self, query: &Query, limit: usize) -> Vec<String> {
        self.web
            .search(query.content(), limit)
            .await
            .data
            .into_iter()
            .map(|hit| {
                hit.title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| PLACEHOLDER_TOOL_NAME.to_string())
            })
            .collect()
    }

    async fn research_one(&self, name: &str) -> Option<CompanyRecord> {
        let hits = self.web.search(&tool_query(name), 1).await;
        let Some(hit) = hits.first() else {
            warn!(tool = name, "No search result, skipping");
            return None;
        };

        let placeholder = take_chars(hit.snippet(), self.params.snippet_char_budget);
        let mut record = CompanyRecord::seeded(name, &hit.url, placeholder);

        let Some(doc) = self.web.scrape(&hit.url).await else {
            warn!(tool = name, url = %hit.url, "Scrape failed, keeping placeholder record");
            return Some(record);
        };
        if doc.markdown.trim().is_empty() {
            warn!(tool = name, url = %hit.url, "Empty page, keeping placeholder record");
            return Some(record);
        }

        let content = take_chars(&doc.markdown, self.params.analysis_char_budget);
        let analysis = complete_as::<CompanyAnalysis>(
            self.gateway.as_ref(),
            PromptTemplate::analysis_system(),
            &PromptTemplate::analysis_user(name, content),
            &self.schema,
        )
        .await;

        match analysis {
            Ok(analysis) => {
                debug!(tool = name, pricing = %analysis.pricing_model, "Analysis complete");
                record.apply_analysis(analysis);
            }
            Err(e) => warn!(tool = name, "Analysis failed, keeping placeholder record: {}", e),
        }
        Some(record)
    }
}
