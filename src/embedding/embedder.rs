use super::error::EmbeddingError;

/// Text-to-vector function consumed by the similarity scorer.
///
/// Implementations must be deterministic for identical input and safe to call
/// from many sentence pipelines at once.
pub trait Embedder: Send + Sync {
    /// Embeds one text into a fixed-length vector of [`dim`](Self::dim) floats.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Output dimension.
    fn dim(&self) -> usize;

    /// `true` when vectors carry no semantic meaning (no model loaded).
    fn is_stub(&self) -> bool {
        false
    }
}

impl<E: Embedder + ?Sized> Embedder for std::sync::Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}

/// Scales `v` to unit L2 norm in place (zero vectors are left as is).
pub fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Type-erased embedder shared across detectors and request handlers.
pub type SharedEmbedder = std::sync::Arc<dyn Embedder>;
