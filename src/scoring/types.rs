use serde::Serialize;

use crate::retrieval::Candidate;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Outcome of evaluating one sentence against its candidates.
pub enum Verdict {
    /// Best candidate exceeded the threshold.
    Matched {
        /// Similarity of the recorded match.
        score: f32,
    },
    /// No candidate exceeded the threshold.
    BelowThreshold {
        /// Best similarity observed.
        top_score: f32,
    },
    /// Retrieval produced nothing to compare against.
    NoCandidates,
}

impl Verdict {
    /// Returns `true` if a match was recorded.
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Matched { .. })
    }

    /// Returns the score (if available).
    pub fn score(&self) -> Option<f32> {
        match self {
            Verdict::Matched { score } | Verdict::BelowThreshold { top_score: score } => {
                Some(*score)
            }
            Verdict::NoCandidates => None,
        }
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            Verdict::Matched { .. } => "MATCHED",
            Verdict::BelowThreshold { .. } => "BELOW_THRESHOLD",
            Verdict::NoCandidates => "NO_CANDIDATES",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Matched { score } => write!(f, "MATCHED (score: {:.4})", score),
            Verdict::BelowThreshold { top_score } => {
                write!(f, "BELOW_THRESHOLD (top_score: {:.4})", top_score)
            }
            Verdict::NoCandidates => write!(f, "NO_CANDIDATES"),
        }
    }
}

#[derive(Debug, Clone)]
/// Candidate annotated with its similarity to the sentence.
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f32,
}

impl ScoredCandidate {
    pub fn new(candidate: Candidate, score: f32) -> Self {
        Self { candidate, score }
    }

    /// Returns `true` if `score` strictly exceeds `threshold`.
    pub fn exceeds_threshold(&self, threshold: f32) -> bool {
        self.score > threshold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Evidence that a sentence duplicates an external passage.
pub struct Match {
    /// 1-based index of the matched sentence.
    pub sentence_index: usize,
    /// Sentence text, truncated for display.
    pub matched_text: String,
    /// Similarity as a percentage, one decimal.
    pub similarity: f64,
    /// Source locator, or a generic label when the source gave none.
    pub source: String,
    /// Char offset of the sentence in the document.
    pub start_index: usize,
    /// Char offset one past the end of the sentence.
    pub end_index: usize,
}
