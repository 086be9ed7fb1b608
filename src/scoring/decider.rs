use tracing::{debug, info};

use crate::constants::{FALLBACK_SOURCE_LABEL, MATCH_DISPLAY_CHARS};
use crate::embedding::Embedder;
use crate::retrieval::Candidate;
use crate::segment::Sentence;
use crate::utils::{round1, truncate_chars};

use super::similarity::SimilarityScorer;
use super::types::{Match, ScoredCandidate, Verdict};

/// Applies the match threshold to a sentence's scored candidates.
#[derive(Debug, Clone, Copy)]
pub struct MatchDecider {
    threshold: f32,
}

impl MatchDecider {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns a match for the best candidate strictly above the threshold.
    pub fn decide<E: Embedder>(
        &self,
        scorer: &SimilarityScorer<E>,
        sentence: &Sentence,
        candidates: &[Candidate],
    ) -> Option<Match> {
        self.evaluate(scorer, sentence, candidates).0
    }

    /// Like [`decide`](Self::decide), also reporting why no match was made.
    pub fn evaluate<E: Embedder>(
        &self,
        scorer: &SimilarityScorer<E>,
        sentence: &Sentence,
        candidates: &[Candidate],
    ) -> (Option<Match>, Verdict) {
        if candidates.is_empty() {
            debug!(sentence = sentence.index(), "No candidates to score");
            return (None, Verdict::NoCandidates);
        }

        let mut top_score = 0.0f32;
        let mut best: Option<ScoredCandidate> = None;

        for candidate in candidates {
            let score = scorer.score(sentence.text(), &candidate.text);
            debug!(
                sentence = sentence.index(),
                source = %candidate.locator,
                provenance = %candidate.provenance,
                score,
                "Scored candidate"
            );
            top_score = top_score.max(score);

            let scored = ScoredCandidate::new(candidate.clone(), score);
            // Ties keep the earlier candidate.
            let improves = best.as_ref().is_none_or(|b| score > b.score);
            if scored.exceeds_threshold(self.threshold) && improves {
                best = Some(scored);
            }
        }

        match best {
            Some(best) => {
                info!(
                    sentence = sentence.index(),
                    score = best.score,
                    threshold = self.threshold,
                    source = %best.candidate.locator,
                    "Match recorded"
                );
                let verdict = Verdict::Matched { score: best.score };
                (Some(build_match(sentence, best)), verdict)
            }
            None => {
                debug!(
                    sentence = sentence.index(),
                    top_score,
                    threshold = self.threshold,
                    "No candidate above threshold"
                );
                (None, Verdict::BelowThreshold { top_score })
            }
        }
    }
}

fn build_match(sentence: &Sentence, best: ScoredCandidate) -> Match {
    let span = sentence.char_span();
    let source = if best.candidate.locator.trim().is_empty() {
        FALLBACK_SOURCE_LABEL.to_string()
    } else {
        best.candidate.locator
    };

    Match {
        sentence_index: sentence.index(),
        matched_text: truncate_chars(sentence.text(), MATCH_DISPLAY_CHARS).to_string(),
        similarity: round1(f64::from(best.score) * 100.0),
        source,
        start_index: span.start,
        end_index: span.end,
    }
}
