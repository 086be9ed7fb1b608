use crate::constants::{
    DEFAULT_MAX_SENTENCES, KEYWORD_MIN_LEN, MAX_QUERY_KEYWORDS, MIN_SENTENCE_CHARS,
    MIN_SENTENCE_WORDS,
};

use super::error::SegmentError;

/// Configuration for [`Segmenter`](super::Segmenter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Sentences kept per document; later sentences are dropped.
    pub max_sentences: usize,
    /// Segments must be strictly longer than this (chars).
    pub min_chars: usize,
    /// Segments must have strictly more words than this.
    pub min_words: usize,
    /// Keywords are words strictly longer than this (chars).
    pub keyword_min_len: usize,
    /// Keywords kept per sentence.
    pub max_keywords: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            min_chars: MIN_SENTENCE_CHARS,
            min_words: MIN_SENTENCE_WORDS,
            keyword_min_len: KEYWORD_MIN_LEN,
            max_keywords: MAX_QUERY_KEYWORDS,
        }
    }
}

impl SegmenterConfig {
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.max_sentences == 0 {
            return Err(SegmentError::InvalidConfig {
                reason: "max_sentences must be > 0".to_string(),
            });
        }
        if self.max_keywords == 0 {
            return Err(SegmentError::InvalidConfig {
                reason: "max_keywords must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
