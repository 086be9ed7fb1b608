//! Sentence segmentation.
//!
//! Splits a document into the ordered, bounded list of [`Sentence`]s the
//! detector checks. Boundaries are runs of `.`, `!` or `?`; this is a heuristic,
//! not a grammatical parser, so abbreviations such as "e.g." do split.
//!
//! Segments that look like structure rather than prose (headers, page numbers,
//! signature lines, short fragments) are dropped before the sentence cap is
//! applied.

pub mod config;
pub mod error;
pub mod types;


pub use config::SegmenterConfig;
pub use error::SegmentError;
pub use types::Sentence;

use std::ops::Range;

use tracing::debug;

/// Prefixes (lowercase) that mark a segment as boilerplate.
const DENY_PREFIXES: &[&str] = &[
    "page",
    "section",
    "chapter",
    "department",
    "year",
    "signature",
    "date",
    "name",
];

/// Splits raw text into checkable sentences.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Returns at most `max_sentences` sentences in document order.
    ///
    /// Fails with [`SegmentError::NoSentences`] when nothing survives filtering.
    pub fn segment(&self, text: &str) -> Result<Vec<Sentence>, SegmentError> {
        let mut sentences = Vec::new();
        let mut considered = 0usize;
        let mut offsets = CharOffsets::new(text);

        for span in split_spans(text) {
            let span = trim_span(text, span);
            if span.is_empty() {
                continue;
            }
            considered += 1;

            let piece = &text[span.clone()];
            if !self.is_content(piece) {
                continue;
            }

            if sentences.len() == self.config.max_sentences {
                break;
            }

            let keywords = self.keywords(piece);
            let char_span = offsets.at(span.start)..offsets.at(span.end);
            sentences.push(Sentence::new(
                sentences.len() + 1,
                piece.to_string(),
                span,
                char_span,
                keywords,
            ));
        }

        debug!(
            considered,
            kept = sentences.len(),
            cap = self.config.max_sentences,
            "Segmented document"
        );

        if sentences.is_empty() {
            return Err(SegmentError::NoSentences);
        }

        Ok(sentences)
    }

    /// Returns `true` if a trimmed segment should be checked.
    pub fn is_content(&self, piece: &str) -> bool {
        if piece.chars().count() <= self.config.min_chars {
            return false;
        }
        if piece.split_whitespace().count() <= self.config.min_words {
            return false;
        }
        !is_boilerplate(piece)
    }

    fn keywords(&self, piece: &str) -> Vec<String> {
        piece
            .split_whitespace()
            .filter(|w| w.chars().count() > self.config.keyword_min_len)
            .take(self.config.max_keywords)
            .map(str::to_string)
            .collect()
    }
}

/// Returns `true` if the segment starts with a structural prefix or a digit.
pub fn is_boilerplate(piece: &str) -> bool {
    let lower = piece.trim_start().to_lowercase();
    if lower.starts_with(|c: char| c.is_ascii_digit()) {
        return true;
    }
    DENY_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
}

/// Byte ranges between runs of sentence-terminal punctuation.
fn split_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    let mut in_run = false;

    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                spans.push(start..i);
                in_run = true;
            }
            start = i + c.len_utf8();
        } else {
            in_run = false;
        }
    }

    if start < text.len() {
        spans.push(start..text.len());
    }

    spans
}

/// Converts ascending byte offsets into char offsets in one forward pass.
struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// `byte` must be a char boundary no smaller than the previous call's.
    fn at(&mut self, byte: usize) -> usize {
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

fn trim_span(text: &str, span: Range<usize>) -> Range<usize> {
    let piece = &text[span.clone()];
    let lead = piece.len() - piece.trim_start().len();
    let trimmed = piece.trim();
    let start = span.start + lead;
    start..start + trimmed.len()
}
