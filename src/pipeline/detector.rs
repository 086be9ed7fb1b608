use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, instrument};

use crate::aggregate::{DetectionResult, aggregate};
use crate::embedding::Embedder;
use crate::retrieval::{CandidateRetriever, PrimarySource, SecondarySource};
use crate::scoring::{Match, MatchDecider, SimilarityScorer};
use crate::segment::{Segmenter, Sentence};

use super::config::DetectorConfig;
use super::error::DetectionError;

/// The detection pipeline: segment, retrieve, score, decide, aggregate.
///
/// Holds long-lived handles (HTTP clients, embedding model) injected at
/// construction; one detector serves any number of concurrent checks.
pub struct Detector<P, S, E> {
    retriever: CandidateRetriever<P, S>,
    scorer: SimilarityScorer<E>,
    segmenter: Segmenter,
    decider: MatchDecider,
    config: DetectorConfig,
}

impl<P, S, E> Detector<P, S, E>
where
    P: PrimarySource,
    S: SecondarySource,
    E: Embedder,
{
    /// Builds a detector, rejecting a configuration that could never
    /// produce a result.
    pub fn new(
        retriever: CandidateRetriever<P, S>,
        scorer: SimilarityScorer<E>,
        config: DetectorConfig,
    ) -> Result<Self, DetectionError> {
        config.validate()?;
        Ok(Self {
            retriever,
            scorer,
            segmenter: Segmenter::new(config.segmenter.clone()),
            decider: MatchDecider::new(config.match_threshold),
            config,
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn retriever(&self) -> &CandidateRetriever<P, S> {
        &self.retriever
    }

    pub fn scorer(&self) -> &SimilarityScorer<E> {
        &self.scorer
    }

    /// Checks one document.
    ///
    /// Returns a complete result or one of the precondition errors; the
    /// length check runs before any outbound call.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub async fn check_document(&self, text: &str) -> Result<DetectionResult, DetectionError> {
        let trimmed_len = text.trim().chars().count();
        if trimmed_len < self.config.min_input_chars {
            return Err(DetectionError::InputTooShort {
                len: trimmed_len,
                min: self.config.min_input_chars,
            });
        }

        let sentences = self.segmenter.segment(text)?;
        info!(sentences = sentences.len(), "Checking document");

        let pending: Vec<_> = sentences
            .iter()
            .map(|sentence| self.check_sentence(sentence))
            .collect();

        // `buffered` yields in input order, so matches stay in sentence order.
        let decided: Vec<SentenceOutcome> = stream::iter(pending)
            .buffered(self.config.concurrency)
            .collect()
            .await;
        let checked = decided.iter().filter(|o| o.had_candidates).count();
        let matches: Vec<Match> = decided.into_iter().filter_map(|o| o.found).collect();

        let result = aggregate(text, &sentences, checked, matches);
        info!(
            matches = result.matches.len(),
            plagiarism_score = result.plagiarism_score,
            originality_score = result.originality_score,
            "Document checked"
        );
        Ok(result)
    }

    async fn check_sentence(&self, sentence: &Sentence) -> SentenceOutcome {
        let candidates = self.retriever.retrieve(sentence).await;
        let (found, verdict) = self.decider.evaluate(&self.scorer, sentence, &candidates);
        debug!(
            sentence = sentence.index(),
            candidates = candidates.len(),
            verdict = verdict.debug_status(),
            "Sentence evaluated"
        );
        SentenceOutcome {
            found,
            had_candidates: !candidates.is_empty(),
        }
    }
}

struct SentenceOutcome {
    found: Option<Match>,
    had_candidates: bool,
}

impl<P, S, E> std::fmt::Debug for Detector<P, S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("retriever", &self.retriever)
            .field("decider", &self.decider)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
