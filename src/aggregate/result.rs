use serde::Serialize;

use crate::scoring::Match;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of checking one document.
pub struct DetectionResult {
    /// Percentage in `[0, 100]`, one decimal.
    pub plagiarism_score: f64,
    /// `100 - plagiarism_score`, one decimal.
    pub originality_score: f64,
    /// Matches in sentence order.
    pub matches: Vec<Match>,
    /// Document text, truncated for transport.
    pub text: String,
    pub word_count: usize,
    /// Unicode scalar count of the full text.
    pub character_count: usize,
    /// Distinct match sources, first-seen order.
    pub sources: Vec<String>,
    /// Sentences that survived segmentation and the cap.
    pub sentences_analyzed: usize,
    /// Sentences for which some source returned a candidate passage.
    pub sentences_checked: usize,
}

impl DetectionResult {
    /// Returns `true` if any sentence matched.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}
