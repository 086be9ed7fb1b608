use crate::constants::{DEFAULT_CONCURRENCY, DEFAULT_MATCH_THRESHOLD, MIN_INPUT_CHARS};
use crate::segment::SegmenterConfig;

use super::error::DetectionError;

/// Configuration for [`Detector`](super::Detector).
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Similarity a candidate must strictly exceed to count as a match.
    pub match_threshold: f32,
    /// Minimum trimmed document length (chars).
    pub min_input_chars: usize,
    /// Sentence pipelines in flight at once.
    pub concurrency: usize,
    pub segmenter: SegmenterConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            min_input_chars: MIN_INPUT_CHARS,
            concurrency: DEFAULT_CONCURRENCY,
            segmenter: SegmenterConfig::default(),
        }
    }
}

impl DetectorConfig {
    pub fn with_match_threshold(mut self, threshold: f32) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.segmenter = self.segmenter.with_max_sentences(max_sentences);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn validate(&self) -> Result<(), DetectionError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(DetectionError::InvalidConfig {
                reason: format!(
                    "match_threshold must be within [0, 1], got {}",
                    self.match_threshold
                ),
            });
        }
        if self.concurrency == 0 {
            return Err(DetectionError::InvalidConfig {
                reason: "concurrency must be > 0".to_string(),
            });
        }
        self.segmenter.validate()?;
        Ok(())
    }
}
