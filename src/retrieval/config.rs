use std::time::Duration;

use crate::constants::{
    DEFAULT_MAX_CANDIDATES, DEFAULT_MIN_CALL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_MS,
    MAX_PASSAGE_CHARS, MIN_PASSAGE_CHARS, SHORT_QUERY_KEYWORDS,
};

/// Configuration for [`CandidateRetriever`](super::CandidateRetriever).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrieverConfig {
    /// Candidates returned per sentence.
    pub max_candidates: usize,
    /// Titles requested from the primary search.
    pub search_limit: usize,
    /// Titles whose extracts are fetched. Fewer primary candidates than this
    /// triggers the secondary source.
    pub primary_results: usize,
    /// Related snippets accepted from the secondary source.
    pub secondary_related: usize,
    /// Passages must be strictly longer than this (chars).
    pub min_passage_chars: usize,
    /// Passages are truncated to this (chars).
    pub max_passage_chars: usize,
    /// Keywords kept for the shortened-query retry.
    pub short_query_words: usize,
    /// Per-call timeout.
    pub request_timeout: Duration,
    /// Minimum spacing between outbound calls.
    pub min_call_interval: Duration,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            search_limit: 3,
            primary_results: 2,
            secondary_related: 2,
            min_passage_chars: MIN_PASSAGE_CHARS,
            max_passage_chars: MAX_PASSAGE_CHARS,
            short_query_words: SHORT_QUERY_KEYWORDS,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            min_call_interval: Duration::from_millis(DEFAULT_MIN_CALL_INTERVAL_MS),
        }
    }
}

impl RetrieverConfig {
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_min_call_interval(mut self, interval: Duration) -> Self {
        self.min_call_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_candidates == 0 {
            return Err("max_candidates must be > 0".to_string());
        }
        if self.primary_results > self.search_limit {
            return Err(format!(
                "primary_results ({}) cannot be greater than search_limit ({})",
                self.primary_results, self.search_limit
            ));
        }
        if self.max_passage_chars <= self.min_passage_chars {
            return Err(format!(
                "max_passage_chars ({}) must exceed min_passage_chars ({})",
                self.max_passage_chars, self.min_passage_chars
            ));
        }
        if self.request_timeout.is_zero() {
            return Err("request_timeout must be > 0".to_string());
        }
        Ok(())
    }
}
