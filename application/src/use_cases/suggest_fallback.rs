//! Suggest fallback use case.
//!
//! Used when extraction produced nothing: asks the model directly for
//! well-known alternatives. The result is never empty.

use crate::config::ResearchParams;
use crate::ports::llm_gateway::LlmGateway;
use std::sync::Arc;
use toolscout_domain::research::{PLACEHOLDER_TOOL_NAME, filter_fallback_names};
use toolscout_domain::{Outcome, PromptTemplate, Query};
use tracing::{info, warn};

/// Use case for suggesting tool names without article content.
pub struct SuggestFallbackUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: ResearchParams,
}

impl SuggestFallbackUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: ResearchParams) -> Self {
        Self { gateway, params }
    }

    /// Suggest up to four names; a single placeholder name when the call
    /// fails or nothing survives filtering.
    pub async fn execute(&self, query: &Query) -> Outcome<Vec<String>> {
        let response = self
            .gateway
            .complete(
                PromptTemplate::fallback_system(),
                &PromptTemplate::fallback_user(query.content()),
            )
            .await;

        let names = match response {
            Ok(text) => {
                let mut names = filter_fallback_names(&text);
                names.truncate(self.params.fallback_cap());
                names
            }
            Err(e) => {
                warn!("Fallback suggestion failed: {}", e);
                Vec::new()
            }
        };

        if names.is_empty() {
            warn!("No fallback suggestions, using placeholder tool name");
            Outcome::degraded(vec![PLACEHOLDER_TOOL_NAME.to_string()])
        } else {
            info!("Fallback tools: {}", names.join(", "));
            Outcome::fresh(names)
        }
    }
}
