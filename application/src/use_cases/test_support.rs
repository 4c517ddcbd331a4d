//! Scripted doubles for the LLM and web ports.

use crate::config::RetryPolicy;
use crate::ports::llm_gateway::{GatewayError, LlmGateway, OutputSchema};
use crate::ports::retrying_web::RetryingWebGateway;
use crate::ports::web_search::{WebError, WebSearchPort};
use crate::use_cases::WebGateway;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use toolscout_domain::{Document, PromptTemplate, ResultSet, SearchHit};

/// Which pipeline prompt a call belongs to, recognised by its system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Category,
    Extraction,
    Fallback,
    Analysis,
    Recommendation,
}

impl PromptKind {
    fn of(system_prompt: &str) -> Self {
        if system_prompt == PromptTemplate::category_system() {
            PromptKind::Category
        } else if system_prompt == PromptTemplate::extraction_system() {
            PromptKind::Extraction
        } else if system_prompt == PromptTemplate::fallback_system() {
            PromptKind::Fallback
        } else if system_prompt == PromptTemplate::analysis_system() {
            PromptKind::Analysis
        } else {
            PromptKind::Recommendation
        }
    }
}

/// Model double: canned replies queued per prompt kind.
///
/// `None` in a queue means "fail this call". An empty queue also fails.
/// Structured analyses are keyed by tool name.
#[derive(Default)]
pub struct ScriptedLlm {
    replies: Mutex<HashMap<PromptKind, VecDeque<Option<String>>>>,
    analyses: Mutex<HashMap<String, serde_json::Value>>,
    calls: Mutex<Vec<(PromptKind, String)>>,
}

impl ScriptedLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, kind: PromptKind, text: &str) -> Self {
        self.push(kind, Some(text.to_string()));
        self
    }

    pub fn fail(self, kind: PromptKind) -> Self {
        self.push(kind, None);
        self
    }

    pub fn analysis(self, tool: &str, value: serde_json::Value) -> Self {
        self.analyses
            .lock()
            .unwrap()
            .insert(tool.to_string(), value);
        self
    }

    fn push(&self, kind: PromptKind, reply: Option<String>) {
        self.replies
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(reply);
    }

    pub fn calls(&self, kind: PromptKind) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, user)| user.clone())
            .collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedLlm {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        let kind = PromptKind::of(system_prompt);
        self.calls
            .lock()
            .unwrap()
            .push((kind, user_prompt.to_string()));
        self.replies
            .lock()
            .unwrap()
            .get_mut(&kind)
            .and_then(VecDeque::pop_front)
            .flatten()
            .ok_or_else(|| GatewayError::RequestFailed(format!("no reply scripted for {kind:?}")))
    }

    async fn complete_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        _schema: &OutputSchema,
    ) -> Result<serde_json::Value, GatewayError> {
        let kind = PromptKind::of(system_prompt);
        self.calls
            .lock()
            .unwrap()
            .push((kind, user_prompt.to_string()));
        let analyses = self.analyses.lock().unwrap();
        analyses
            .iter()
            .find(|(tool, _)| user_prompt.starts_with(&format!("Company/Tool: {tool}\n")))
            .map(|(_, value)| value.clone())
            .ok_or_else(|| GatewayError::MalformedResponse("no analysis scripted".to_string()))
    }
}

/// Web double: results keyed by exact query, pages keyed by URL.
#[derive(Default)]
pub struct MockWeb {
    results: HashMap<String, ResultSet>,
    pages: HashMap<String, String>,
    failing_queries: HashSet<String>,
    failing_urls: HashSet<String>,
    searches: Mutex<Vec<(String, usize)>>,
}

impl MockWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(mut self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.results.insert(query.to_string(), ResultSet::new(hits));
        self
    }

    pub fn page(mut self, url: &str, markdown: &str) -> Self {
        self.pages.insert(url.to_string(), markdown.to_string());
        self
    }

    pub fn failing_search(mut self, query: &str) -> Self {
        self.failing_queries.insert(query.to_string());
        self
    }

    pub fn failing_scrape(mut self, url: &str) -> Self {
        self.failing_urls.insert(url.to_string());
        self
    }

    pub fn searches(&self) -> Vec<(String, usize)> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebSearchPort for MockWeb {
    async fn search(&self, query: &str, limit: usize) -> Result<ResultSet, WebError> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        if self.failing_queries.contains(query) {
            return Err(WebError::Service("search backend unavailable".to_string()));
        }
        let mut set = self.results.get(query).cloned().unwrap_or_default();
        set.data.truncate(limit);
        Ok(set)
    }

    async fn scrape(&self, url: &str) -> Result<Option<Document>, WebError> {
        if self.failing_urls.contains(url) {
            return Err(WebError::Status {
                status: 502,
                message: "Bad Gateway".to_string(),
            });
        }
        Ok(self.pages.get(url).map(Document::new))
    }
}

/// Wrap a mock in a retrying gateway with no backoff delay.
pub fn web_gateway(web: Arc<MockWeb>) -> Arc<WebGateway> {
    let web: Arc<dyn WebSearchPort> = web;
    Arc::new(RetryingWebGateway::new(web).with_policy(RetryPolicy::new(2, Duration::ZERO)))
}
