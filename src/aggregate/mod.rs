//! Document-level scoring.
//!
//! The plagiarism score multiplies breadth (fraction of sentences matched) by
//! confidence (mean match similarity). One perfect match out of twelve
//! sentences therefore scores far below many moderate matches.

pub mod result;

#[cfg(test)]
mod tests;

pub use result::DetectionResult;

use tracing::debug;

use crate::constants::RESULT_TEXT_CHARS;
use crate::scoring::Match;
use crate::segment::Sentence;
use crate::utils::{round1, truncate_chars};

/// Combines per-sentence matches into a [`DetectionResult`].
///
/// Matches are reordered by sentence index. `checked` is the number of
/// sentences any source returned candidates for; the match ratio is still
/// taken over every analysed sentence. Word and character counts are taken
/// from the full `text`; the returned text is truncated for transport.
pub fn aggregate(
    text: &str,
    sentences: &[Sentence],
    checked: usize,
    mut matches: Vec<Match>,
) -> DetectionResult {
    matches.sort_by_key(|m| m.sentence_index);

    let match_ratio = if sentences.is_empty() {
        0.0
    } else {
        matches.len() as f64 / sentences.len() as f64
    };

    let avg_similarity = if matches.is_empty() {
        0.0
    } else {
        matches.iter().map(|m| m.similarity).sum::<f64>() / matches.len() as f64
    };

    let plagiarism_score = if matches.is_empty() {
        0.0
    } else {
        round1(match_ratio * avg_similarity).clamp(0.0, 100.0)
    };
    let originality_score = round1(100.0 - plagiarism_score);

    let mut sources: Vec<String> = Vec::new();
    for m in &matches {
        if !sources.contains(&m.source) {
            sources.push(m.source.clone());
        }
    }

    debug!(
        sentences = sentences.len(),
        checked,
        matches = matches.len(),
        match_ratio,
        avg_similarity,
        plagiarism_score,
        "Aggregated document"
    );

    DetectionResult {
        plagiarism_score,
        originality_score,
        matches,
        text: truncate_chars(text, RESULT_TEXT_CHARS).to_string(),
        word_count: text.split_whitespace().count(),
        character_count: text.chars().count(),
        sources,
        sentences_analyzed: sentences.len(),
        sentences_checked: checked,
    }
}
