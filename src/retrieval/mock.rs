//! In-memory knowledge sources for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::error::{RetrievalError, RetrievalResult};
use super::source::{PrimarySource, SecondarySource};
use super::types::{Passage, WebAnswer};

/// Scripted primary source.
///
/// `search` answers from per-query results, falling back to the default
/// results; `fetch_extract` answers from registered pages.
#[derive(Debug, Default)]
pub struct MockPrimarySource {
    pages: HashMap<String, Passage>,
    query_results: HashMap<String, Vec<String>>,
    default_results: Vec<String>,
    failing_titles: HashSet<String>,
    failing: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockPrimarySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a page and returns it from every search without a specific result.
    pub fn with_page(mut self, title: &str, text: &str, locator: &str) -> Self {
        self.pages
            .insert(title.to_string(), Passage::new(text, locator));
        self.default_results.push(title.to_string());
        self
    }

    /// Registers a page reachable only through [`with_query_results`](Self::with_query_results).
    pub fn with_extract(mut self, title: &str, text: &str, locator: &str) -> Self {
        self.pages
            .insert(title.to_string(), Passage::new(text, locator));
        self
    }

    /// Titles returned for one exact query.
    pub fn with_query_results(mut self, query: &str, titles: &[&str]) -> Self {
        self.query_results.insert(
            query.to_string(),
            titles.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Searches still list `title`, but fetching it fails.
    pub fn with_failing_title(mut self, title: &str) -> Self {
        self.failing_titles.insert(title.to_string());
        self
    }

    /// Every call fails.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Every call sleeps before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Total calls made (searches and extract fetches).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Search queries received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    async fn enter(&self) -> RetrievalResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(RetrievalError::Unavailable {
                origin: "mock-primary",
                reason: "configured to fail".to_string(),
            });
        }
        Ok(())
    }
}

impl PrimarySource for MockPrimarySource {
    fn name(&self) -> &'static str {
        "mock-primary"
    }

    async fn search(&self, query: &str, limit: usize) -> RetrievalResult<Vec<String>> {
        self.queries.lock().push(query.to_string());
        self.enter().await?;

        let titles = self
            .query_results
            .get(query)
            .unwrap_or(&self.default_results);
        Ok(titles.iter().take(limit).cloned().collect())
    }

    async fn fetch_extract(&self, title: &str) -> RetrievalResult<Option<Passage>> {
        self.enter().await?;
        if self.failing_titles.contains(title) {
            return Err(RetrievalError::Status {
                origin: "mock-primary",
                status: 503,
            });
        }
        Ok(self.pages.get(title).cloned())
    }
}

/// Scripted secondary source returning one fixed answer.
#[derive(Debug, Default)]
pub struct MockSecondarySource {
    answer: WebAnswer,
    failing: bool,
    calls: AtomicUsize,
}

impl MockSecondarySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_abstract(mut self, text: &str, locator: &str) -> Self {
        self.answer.abstract_passage = Passage::new(text, locator);
        self
    }

    pub fn with_related(mut self, text: &str, locator: &str) -> Self {
        self.answer.related.push(Passage::new(text, locator));
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SecondarySource for MockSecondarySource {
    fn name(&self) -> &'static str {
        "mock-secondary"
    }

    async fn lookup(&self, _query: &str) -> RetrievalResult<WebAnswer> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(RetrievalError::Unavailable {
                origin: "mock-secondary",
                reason: "configured to fail".to_string(),
            });
        }
        Ok(self.answer.clone())
    }
}
