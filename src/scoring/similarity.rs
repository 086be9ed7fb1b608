use tracing::warn;

use crate::embedding::Embedder;

use super::error::ScoringError;

/// Meaning-level similarity between two texts, in `[0, 1]`.
///
/// Both texts are lowercased and trimmed before embedding. Negative cosine
/// has no plagiarism interpretation and is clamped to zero.
#[derive(Debug)]
pub struct SimilarityScorer<E> {
    embedder: E,
}

impl<E: Embedder> SimilarityScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Scores `a` against `b`, surfacing embedding failures.
    pub fn try_score(&self, a: &str, b: &str) -> Result<f32, ScoringError> {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() {
            return Err(ScoringError::EmptyInput);
        }

        let va = self.embedder.embed(&a)?;
        let vb = self.embedder.embed(&b)?;
        if va.len() != vb.len() {
            return Err(ScoringError::DimensionMismatch {
                left: va.len(),
                right: vb.len(),
            });
        }

        Ok(clamp_unit(cosine_similarity(&va, &vb)))
    }

    /// Fail-soft variant: any error scores `0.0`.
    pub fn score(&self, a: &str, b: &str) -> f32 {
        match self.try_score(a, b) {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "similarity scoring failed, scoring 0.0");
                0.0
            }
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn clamp_unit(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Cosine similarity; zero when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
