//! Extract tools use case.
//!
//! Asks the model to list product names found in article text, then runs
//! the strict line filter over the answer.

use crate::config::ResearchParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use toolscout_domain::research::filter_tool_names;
use toolscout_domain::{CategoryInfo, Extraction, ExtractionRules, PromptTemplate, Query};
use tracing::{debug, info};

/// Use case for extracting candidate tool names from article content.
pub struct ExtractToolsUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: ResearchParams,
}

impl ExtractToolsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: ResearchParams) -> Self {
        Self { gateway, params }
    }

    fn rules(&self) -> ExtractionRules {
        ExtractionRules {
            max_tools: self.params.extracted_cap(),
            ..ExtractionRules::strict()
        }
    }

    /// Run one extraction.
    ///
    /// [`Extraction::NoneFound`] is an ordinary outcome; `Err` only reports
    /// that the model call itself failed.
    pub async fn execute(
        &self,
        query: &Query,
        content: &str,
        category: &CategoryInfo,
    ) -> Result<Extraction, GatewayError> {
        let response = self
            .gateway
            .complete(
                &PromptTemplate::extraction_system(),
                &PromptTemplate::extraction_user(query.content(), content, category),
            )
            .await?;
        debug!("Extraction response: {} chars", response.len());

        let extraction = filter_tool_names(&response, &query.tokens(), &self.rules());
        match &extraction {
            Extraction::Found(names) => info!("Extracted tools: {}", names.join(", ")),
            Extraction::NoneFound => info!("No usable tool names in extraction response"),
        }
        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{PromptKind, ScriptedLlm};

    async fn extract(response: &str, query: &str) -> Extraction {
        let llm = Arc::new(ScriptedLlm::new().reply(PromptKind::Extraction, response));
        ExtractToolsUseCase::new(llm, ResearchParams::default())
            .execute(&Query::new(query), "article text", &CategoryInfo::generic())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_slack_scenario() {
        let result = extract("Discord\nMattermost\nSlack\n", "alternatives to Slack").await;
        assert_eq!(result, Extraction::Found(vec!["Discord".into(), "Mattermost".into()]));
    }

    #[tokio::test]
    async fn test_preamble_and_duplicate() {
        let result = extract(
            "1. Based on the content, here are alternatives:\n2. Notion\n3. Notion\n",
            "note taking apps",
        )
        .await;
        assert_eq!(result, Extraction::Found(vec!["Notion".into()]));
    }

    #[tokio::test]
    async fn test_sentinel_is_none_found() {
        let result = extract("No specific tools found", "vector databases").await;
        assert_eq!(result, Extraction::NoneFound);
    }

    #[tokio::test]
    async fn test_configured_cap() {
        let llm = Arc::new(ScriptedLlm::new().reply(PromptKind::Extraction, "A\nB\nC\nD"));
        let params = ResearchParams::default().with_max_extracted_tools(2);
        let result = ExtractToolsUseCase::new(llm, params)
            .execute(&Query::new("x"), "", &CategoryInfo::generic())
            .await
            .unwrap();
        assert_eq!(result.into_names(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_call_failure_is_error() {
        let llm = Arc::new(ScriptedLlm::new().fail(PromptKind::Extraction));
        let result = ExtractToolsUseCase::new(llm, ResearchParams::default())
            .execute(&Query::new("x"), "", &CategoryInfo::generic())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_prompt_carries_category_and_content() {
        let llm = Arc::new(ScriptedLlm::new().reply(PromptKind::Extraction, "Zulip"));
        let category = CategoryInfo::new("team chat", ["Zulip"], ["chat"]);
        ExtractToolsUseCase::new(llm.clone(), ResearchParams::default())
            .execute(&Query::new("slack"), "Zulip is great", &category)
            .await
            .unwrap();

        let prompt = &llm.calls(PromptKind::Extraction)[0];
        assert!(prompt.contains("Extract ONLY specific team chat"));
        assert!(prompt.contains("Zulip is great"));
        assert!(prompt.contains("chat, slack"));
    }
}
