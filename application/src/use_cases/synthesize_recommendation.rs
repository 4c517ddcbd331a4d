//! Synthesize recommendation use case.
//!
//! Summarizes the researched records into one prompt and bounds the
//! model's answer. A failed call is terminal for the stage: the fixed
//! "unavailable" message is returned, degraded, and not retried.

use crate::ports::llm_gateway::LlmGateway;
use std::sync::Arc;
use toolscout_domain::research::{
    RECOMMENDATION_UNAVAILABLE, summarize_companies, truncate_recommendation,
};
use toolscout_domain::{CompanyRecord, Outcome, PromptTemplate, Query};
use tracing::{debug, warn};

/// Use case for producing the final recommendation text.
pub struct SynthesizeRecommendationUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl SynthesizeRecommendationUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: &Query, companies: &[CompanyRecord]) -> Outcome<String> {
        let summary = summarize_companies(companies);
        debug!(
            "Recommendation input: {} records, {} chars",
            companies.len(),
            summary.len()
        );

        let response = self
            .gateway
            .complete(
                PromptTemplate::recommendation_system(),
                &PromptTemplate::recommendation_user(query.content(), &summary),
            )
            .await;

        match response {
            Ok(text) => Outcome::fresh(truncate_recommendation(&text)),
            Err(e) => {
                warn!("Recommendation synthesis failed: {}", e);
                Outcome::degraded(RECOMMENDATION_UNAVAILABLE.to_string())
            }
        }
    }
}
