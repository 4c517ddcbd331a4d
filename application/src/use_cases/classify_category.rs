//! Classify category use case.
//!
//! One model call turning the query into a [`CategoryInfo`]. Never fails:
//! a failed call yields [`CategoryInfo::generic`] flagged as degraded.

use crate::ports::llm_gateway::LlmGateway;
use std::sync::Arc;
use toolscout_domain::research::parse_category_response;
use toolscout_domain::{CategoryInfo, Outcome, PromptTemplate, Query};
use tracing::{debug, warn};

/// Use case for inferring the tool category of a query.
pub struct ClassifyCategoryUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl ClassifyCategoryUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: &Query) -> Outcome<CategoryInfo> {
        let response = self
            .gateway
            .complete(
                PromptTemplate::category_system(),
                &PromptTemplate::category_user(query.content()),
            )
            .await;

        match response {
            Ok(text) => {
                let info = parse_category_response(&text);
                debug!(
                    category = %info.category,
                    examples = info.examples.len(),
                    "Classified query"
                );
                Outcome::fresh(info)
            }
            Err(e) => {
                warn!("Category classification failed, using generic category: {}", e);
                Outcome::degraded(CategoryInfo::generic())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{PromptKind, ScriptedLlm};

    #[tokio::test]
    async fn test_parses_model_answer() {
        let llm = Arc::new(ScriptedLlm::new().reply(
            PromptKind::Category,
            "CATEGORY: team communication platforms\n\
             EXAMPLES: Microsoft Teams, Discord, Mattermost, Rocket.Chat, Zulip\n\
             EXCLUDE: chat, messaging",
        ));
        let use_case = ClassifyCategoryUseCase::new(llm.clone());

        let outcome = use_case.execute(&Query::new("alternatives to Slack")).await;

        assert!(!outcome.is_degraded());
        let info = outcome.into_value();
        assert_eq!(info.category, "team communication platforms");
        assert_eq!(
            info.examples,
            vec!["Microsoft Teams", "Discord", "Mattermost", "Rocket.Chat", "Zulip"]
        );
        assert!(info.exclude_terms.contains("chat"));
        assert!(llm.calls(PromptKind::Category)[0].contains("alternatives to Slack"));
    }

    #[tokio::test]
    async fn test_failure_uses_generic_default() {
        let llm = Arc::new(ScriptedLlm::new().fail(PromptKind::Category));
        let use_case = ClassifyCategoryUseCase::new(llm.clone());

        let outcome = use_case.execute(&Query::new("vector databases")).await;

        assert!(outcome.is_degraded());
        assert_eq!(outcome.value, CategoryInfo::generic());
        // single attempt, no retry
        assert_eq!(llm.calls(PromptKind::Category).len(), 1);
    }

    #[tokio::test]
    async fn test_unlabelled_answer_is_not_degraded() {
        let llm = Arc::new(ScriptedLlm::new().reply(PromptKind::Category, "no idea"));
        let use_case = ClassifyCategoryUseCase::new(llm);

        let outcome = use_case.execute(&Query::new("ci runners")).await;

        assert!(!outcome.is_degraded());
        assert!(outcome.value.category.is_empty());
        assert!(outcome.value.examples.is_empty());
    }
}
