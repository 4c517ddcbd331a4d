//! Run Research use case
//!
//! The pipeline controller. Runs the fixed stage sequence
//! `Extract → Research → Analyze → Done` over one [`ResearchState`]:
//! each stage reads the state, returns a [`StateUpdate`], and the update
//! is merged before the next stage starts. No stage is skipped or
//! re-entered, whatever the previous stage produced.

use crate::config::ResearchParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::WebGateway;
use crate::use_cases::classify_category::ClassifyCategoryUseCase;
use crate::use_cases::extract_tools::ExtractToolsUseCase;
use crate::use_cases::gather_articles::GatherArticlesUseCase;
use crate::use_cases::research_tools::ResearchToolsUseCase;
use crate::use_cases::suggest_fallback::SuggestFallbackUseCase;
use crate::use_cases::synthesize_recommendation::SynthesizeRecommendationUseCase;
use std::sync::Arc;
use toolscout_domain::{Extraction, Query, ResearchState, Stage, StateUpdate};
use tracing::{info, warn};

/// Use case for running one research query end to end
pub struct RunResearchUseCase {
    classify: ClassifyCategoryUseCase,
    gather: GatherArticlesUseCase,
    extract: ExtractToolsUseCase,
    fallback: SuggestFallbackUseCase,
    research: ResearchToolsUseCase,
    synthesize: SynthesizeRecommendationUseCase,
}

impl RunResearchUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        web: Arc<WebGateway>,
        params: ResearchParams,
    ) -> Self {
        Self {
            classify: ClassifyCategoryUseCase::new(gateway.clone()),
            gather: GatherArticlesUseCase::new(web.clone(), params.clone()),
            extract: ExtractToolsUseCase::new(gateway.clone(), params.clone()),
            fallback: SuggestFallbackUseCase::new(gateway.clone(), params.clone()),
            research: ResearchToolsUseCase::new(gateway.clone(), web, params),
            synthesize: SynthesizeRecommendationUseCase::new(gateway),
        }
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, query: Query) -> ResearchState {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute with progress callbacks
    ///
    /// Always reaches [`Stage::Done`]; failures surface as degraded values
    /// inside the returned state.
    pub async fn execute_with_progress(
        &self,
        query: Query,
        progress: &dyn ProgressNotifier,
    ) -> ResearchState {
        info!("Starting research: {}", query);
        let mut state = ResearchState::new(query);
        let mut stage = Stage::Extract;

        while !stage.is_terminal() {
            progress.on_stage_start(stage);
            let update = self.run_stage(stage, &state, progress).await;
            state.merge(update);
            progress.on_stage_end(stage);
            stage = stage.next();
        }

        info!(
            "Research complete: {} tools extracted, {} researched",
            state.extracted_tools.len(),
            state.companies.len()
        );
        state
    }

    async fn run_stage(
        &self,
        stage: Stage,
        state: &ResearchState,
        progress: &dyn ProgressNotifier,
    ) -> StateUpdate {
        match stage {
            Stage::Extract => self.stage_extract(&state.query, progress).await,
            Stage::Research => {
                let companies = self
                    .research
                    .execute(&state.query, &state.extracted_tools, progress)
                    .await;
                StateUpdate::companies(companies)
            }
            Stage::Analyze => {
                let outcome = self.synthesize.execute(&state.query, &state.companies).await;
                if outcome.is_degraded() {
                    progress.on_warning("Recommendations unavailable");
                }
                StateUpdate::analysis(outcome.into_value())
            }
            Stage::Done => StateUpdate::default(),
        }
    }

    /// Classify, read articles, extract; fall back when extraction fails or
    /// finds nothing.
    async fn stage_extract(&self, query: &Query, progress: &dyn ProgressNotifier) -> StateUpdate {
        let category = self.classify.execute(query).await;
        if category.is_degraded() {
            progress.on_warning("Category classification failed, using generic category");
        }
        let category = category.into_value();
        progress.on_step(&format!("Category: {}", category.category));

        let content = self.gather.execute(query, progress).await;

        let tools = match self.extract.execute(query, &content, &category).await {
            Ok(Extraction::Found(names)) => names,
            Ok(Extraction::NoneFound) => {
                progress.on_step("No tools extracted, asking for suggestions");
                self.suggest(query, progress).await
            }
            Err(e) => {
                warn!("Tool extraction failed: {}", e);
                progress.on_warning("Tool extraction failed, asking for suggestions");
                self.suggest(query, progress).await
            }
        };

        progress.on_step(&format!("Tools: {}", tools.join(", ")));
        StateUpdate::extracted_tools(tools)
    }

    async fn suggest(&self, query: &Query, progress: &dyn ProgressNotifier) -> Vec<String> {
        let outcome = self.fallback.execute(query).await;
        if outcome.is_degraded() {
            progress.on_warning("No suggestions available, using placeholder tool name");
        }
        outcome.into_value()
    }
}
