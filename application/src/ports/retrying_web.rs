//! Retrying wrapper around the web search port.
//!
//! Turns `search` and `scrape` into total functions: every failure is
//! absorbed and reported as an empty result set or a missing document.
//!
//! | Failure kind | Action |
//! |--------------|--------|
//! | Transient (502 / bad gateway) | retry up to `max_retries` times, delay `(attempt + 1) × base_delay` |
//! | Malformed (json / parse) | give up immediately |
//! | Other | give up immediately |

use super::web_search::{WebError, WebSearchPort};
use crate::config::RetryPolicy;
use std::future::Future;
use std::sync::Arc;
use toolscout_domain::{Document, ResultSet, ServiceErrorKind};
use tracing::{debug, warn};

/// The retrying gateway over a type-erased adapter, as the use cases hold it.
pub type WebGateway = RetryingWebGateway<dyn WebSearchPort>;

/// Search/scrape gateway that never fails.
pub struct RetryingWebGateway<W: WebSearchPort + ?Sized> {
    inner: Arc<W>,
    policy: RetryPolicy,
}

impl<W: WebSearchPort + ?Sized> RetryingWebGateway<W> {
    pub fn new(inner: Arc<W>) -> Self {
        Self {
            inner,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Search; an empty result set on any failure.
    pub async fn search(&self, query: &str, limit: usize) -> ResultSet {
        self.with_retry("search", query, || self.inner.search(query, limit))
            .await
            .unwrap_or_default()
    }

    /// Scrape; `None` on any failure or when the page had no content.
    pub async fn scrape(&self, url: &str) -> Option<Document> {
        self.with_retry("scrape", url, || self.inner.scrape(url))
            .await
            .flatten()
    }

    async fn with_retry<T, F, Fut>(
        &self,
        operation: &str,
        resource: &str,
        mut call: F,
    ) -> Option<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, WebError>>,
    {
        let mut attempt = 0;
        loop {
            match call().await {
                Ok(value) => return Some(value),
                Err(e) => match e.kind() {
                    ServiceErrorKind::Transient if attempt < self.policy.max_retries => {
                        let delay = self.policy.delay_for(attempt);
                        warn!(
                            operation,
                            resource,
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            "Transient {} error, retrying: {}",
                            operation,
                            e
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    ServiceErrorKind::Transient => {
                        warn!(
                            operation,
                            resource,
                            "{} failed after {} retries: {}",
                            operation,
                            self.policy.max_retries,
                            e
                        );
                        return None;
                    }
                    ServiceErrorKind::Malformed => {
                        warn!(operation, resource, "Response parsing error: {}", e);
                        return None;
                    }
                    ServiceErrorKind::Other => {
                        warn!(operation, resource, "{} error: {}", operation, e);
                        return None;
                    }
                },
            }
            debug!(operation, resource, attempt, "Retrying");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use toolscout_domain::SearchHit;

    struct FlakyWeb {
        search_errors: Mutex<VecDeque<WebError>>,
        scrape_errors: Mutex<VecDeque<WebError>>,
        search_calls: AtomicUsize,
        scrape_calls: AtomicUsize,
    }

    impl FlakyWeb {
        fn new(search_errors: Vec<WebError>, scrape_errors: Vec<WebError>) -> Self {
            Self {
                search_errors: Mutex::new(search_errors.into()),
                scrape_errors: Mutex::new(scrape_errors.into()),
                search_calls: AtomicUsize::new(0),
                scrape_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl WebSearchPort for FlakyWeb {
        async fn search(&self, query: &str, _limit: usize) -> Result<ResultSet, WebError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            match self.search_errors.lock().unwrap().pop_front() {
                Some(e) => Err(e),
                None => Ok(ResultSet::new(vec![SearchHit::new(format!(
                    "https://example.com/{query}"
                ))])),
            }
        }

        async fn scrape(&self, _url: &str) -> Result<Option<Document>, WebError> {
            self.scrape_calls.fetch_add(1, Ordering::SeqCst);
            match self.scrape_errors.lock().unwrap().pop_front() {
                Some(e) => Err(e),
                None => Ok(Some(Document::new("# page"))),
            }
        }
    }

    fn bad_gateway() -> WebError {
        WebError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        }
    }

    fn gateway(web: FlakyWeb) -> (Arc<FlakyWeb>, RetryingWebGateway<FlakyWeb>) {
        let web = Arc::new(web);
        let gw = RetryingWebGateway::new(Arc::clone(&web))
            .with_policy(RetryPolicy::new(2, Duration::ZERO));
        (web, gw)
    }

    #[tokio::test]
    async fn test_transient_error_recovers_within_budget() {
        let (web, gw) = gateway(FlakyWeb::new(vec![bad_gateway(), bad_gateway()], vec![]));

        let result = gw.search("zulip", 1).await;

        assert_eq!(result.len(), 1);
        assert_eq!(web.search_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_transient_error_exhausts_to_empty() {
        let (web, gw) = gateway(FlakyWeb::new(
            vec![bad_gateway(), bad_gateway(), bad_gateway()],
            vec![],
        ));

        let result = gw.search("zulip", 1).await;

        assert!(result.is_empty());
        assert_eq!(web.search_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_malformed_error_not_retried() {
        let (web, gw) = gateway(FlakyWeb::new(
            vec![WebError::InvalidResponse("bad json".to_string())],
            vec![],
        ));

        assert!(gw.search("zulip", 1).await.is_empty());
        assert_eq!(web.search_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_other_error_not_retried() {
        let (web, gw) = gateway(FlakyWeb::new(
            vec![],
            vec![WebError::RequestFailed("connection refused".to_string())],
        ));

        assert!(gw.scrape("https://zulip.com").await.is_none());
        assert_eq!(web.scrape_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_scrape_retries_transient() {
        let (web, gw) = gateway(FlakyWeb::new(vec![], vec![bad_gateway()]));

        let doc = gw.scrape("https://zulip.com").await;

        assert_eq!(doc, Some(Document::new("# page")));
        assert_eq!(web.scrape_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_retries() {
        let web = Arc::new(FlakyWeb::new(vec![bad_gateway()], vec![]));
        let gw = RetryingWebGateway::new(Arc::clone(&web))
            .with_policy(RetryPolicy::new(0, Duration::ZERO));

        assert!(gw.search("zulip", 1).await.is_empty());
        assert_eq!(web.search_calls.load(Ordering::SeqCst), 1);
    }
}
