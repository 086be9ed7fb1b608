use std::future::Future;

use tracing::{debug, warn};

use super::config::RetrieverConfig;
use super::error::{RetrievalError, RetrievalResult};
use super::gate::MinIntervalGate;
use super::source::{PrimarySource, SecondarySource};
use super::types::{Candidate, Passage, Provenance};
use crate::segment::Sentence;
use crate::utils::truncate_chars;

/// Source-prioritised candidate retrieval with graceful degradation.
///
/// Owns the politeness gate, so every call made through one retriever is
/// spaced by [`RetrieverConfig::min_call_interval`] no matter how many
/// sentences are in flight.
pub struct CandidateRetriever<P, S> {
    primary: P,
    secondary: S,
    gate: MinIntervalGate,
    config: RetrieverConfig,
}

impl<P: PrimarySource, S: SecondarySource> CandidateRetriever<P, S> {
    pub fn new(primary: P, secondary: S, config: RetrieverConfig) -> Self {
        let gate = MinIntervalGate::new(config.min_call_interval);
        Self {
            primary,
            secondary,
            gate,
            config,
        }
    }

    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Returns up to `max_candidates` candidates for a sentence, primary first.
    ///
    /// Never fails: a source error is logged and counts as zero results from
    /// that source.
    pub async fn retrieve(&self, sentence: &Sentence) -> Vec<Candidate> {
        let keywords = sentence.keywords();
        if keywords.is_empty() {
            debug!(sentence = sentence.index(), "no keywords, skipping retrieval");
            return Vec::new();
        }

        let query = sentence.query();
        let mut candidates = self.primary_or_empty(sentence.index(), &query).await;

        if candidates.len() < self.config.primary_results {
            candidates.extend(self.secondary_or_empty(sentence.index(), &query).await);
        }

        if candidates.is_empty() && keywords.len() > self.config.short_query_words {
            let short = sentence.short_query(self.config.short_query_words);
            debug!(sentence = sentence.index(), query = %short, "retrying with shortened query");
            candidates = self.primary_or_empty(sentence.index(), &short).await;
        }

        candidates.truncate(self.config.max_candidates);
        debug!(
            sentence = sentence.index(),
            candidates = candidates.len(),
            "retrieval complete"
        );
        candidates
    }

    /// Searches the primary source and fetches extracts for the top titles.
    ///
    /// The search call failing is an error; a failed extract fetch only drops
    /// that title.
    pub async fn try_primary(&self, query: &str) -> RetrievalResult<Vec<Candidate>> {
        let origin = self.primary.name();
        let titles = self
            .call(origin, self.primary.search(query, self.config.search_limit))
            .await?;

        let mut candidates = Vec::new();
        for title in titles.iter().take(self.config.primary_results) {
            match self.call(origin, self.primary.fetch_extract(title)).await {
                Ok(Some(passage)) => {
                    if let Some(candidate) = self.accept(passage, Provenance::Primary) {
                        candidates.push(candidate);
                    }
                }
                Ok(None) => debug!(source = origin, %title, "no extract"),
                Err(e) => warn!(source = origin, %title, error = %e, "extract fetch failed"),
            }
        }
        Ok(candidates)
    }

    /// Asks the secondary source for an abstract and related snippets.
    pub async fn try_secondary(&self, query: &str) -> RetrievalResult<Vec<Candidate>> {
        let origin = self.secondary.name();
        let answer = self.call(origin, self.secondary.lookup(query)).await?;

        let mut candidates = Vec::new();
        if let Some(candidate) = self.accept(answer.abstract_passage, Provenance::Secondary) {
            candidates.push(candidate);
        }
        candidates.extend(
            answer
                .related
                .into_iter()
                .filter_map(|p| self.accept(p, Provenance::Secondary))
                .take(self.config.secondary_related),
        );
        Ok(candidates)
    }

    async fn primary_or_empty(&self, sentence: usize, query: &str) -> Vec<Candidate> {
        self.try_primary(query).await.unwrap_or_else(|e| {
            warn!(sentence, source = self.primary.name(), error = %e, "primary source unavailable");
            Vec::new()
        })
    }

    async fn secondary_or_empty(&self, sentence: usize, query: &str) -> Vec<Candidate> {
        self.try_secondary(query).await.unwrap_or_else(|e| {
            warn!(sentence, source = self.secondary.name(), error = %e, "secondary source unavailable");
            Vec::new()
        })
    }

    /// Gate, then run `fut` under the per-call timeout.
    async fn call<T>(
        &self,
        origin: &'static str,
        fut: impl Future<Output = RetrievalResult<T>>,
    ) -> RetrievalResult<T> {
        self.gate.wait().await;
        let timeout = self.config.request_timeout;
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(RetrievalError::Timeout {
                origin,
                timeout_ms: timeout.as_millis() as u64,
            }),
        }
    }

    fn accept(&self, passage: Passage, provenance: Provenance) -> Option<Candidate> {
        let text = passage.text.trim();
        if text.chars().count() <= self.config.min_passage_chars {
            return None;
        }
        let text = truncate_chars(text, self.config.max_passage_chars);
        Some(Candidate::new(text, passage.locator, provenance))
    }
}

impl<P, S> std::fmt::Debug for CandidateRetriever<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateRetriever")
            .field("gate", &self.gate)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
