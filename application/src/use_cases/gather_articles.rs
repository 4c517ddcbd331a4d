//! Gather articles use case.
//!
//! Finds comparison articles for a query and concatenates the first part
//! of each scraped page. This is the raw text the extractor reads.

use crate::config::ResearchParams;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::WebGateway;
use std::sync::Arc;
use toolscout_domain::Query;
use toolscout_domain::core::string::take_chars;
use tracing::{debug, info};

/// Appended to the query when searching for articles.
pub const ARTICLE_QUERY_SUFFIX: &str = "tools comparison best alternatives";

/// Separator between article excerpts.
const ARTICLE_SEPARATOR: &str = "\n\n";

pub fn article_query(query: &Query) -> String {
    format!("{} {}", query.content(), ARTICLE_QUERY_SUFFIX)
}

/// Use case for collecting article text for tool extraction.
pub struct GatherArticlesUseCase {
    web: Arc<WebGateway>,
    params: ResearchParams,
}

impl GatherArticlesUseCase {
    pub fn new(web: Arc<WebGateway>, params: ResearchParams) -> Self {
        Self { web, params }
    }

    /// Search, scrape and concatenate. Empty when nothing could be read.
    pub async fn execute(&self, query: &Query, progress: &dyn ProgressNotifier) -> String {
        let search_query = article_query(query);
        progress.on_step(&format!("Searching articles: {}", search_query));

        let hits = self
            .web
            .search(&search_query, self.params.article_count)
            .await;
        info!("Found {} candidate articles", hits.len());

        let mut excerpts = Vec::new();
        for hit in &hits.data {
            match self.web.scrape(&hit.url).await {
                Some(doc) => {
                    let excerpt = take_chars(&doc.markdown, self.params.article_char_budget);
                    excerpts.push(excerpt.to_string());
                }
                None => debug!(url = %hit.url, "Article skipped, no content"),
            }
        }

        excerpts.join(ARTICLE_SEPARATOR)
    }
}
