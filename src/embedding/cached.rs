use moka::sync::Cache;
use tracing::debug;

use super::embedder::Embedder;
use super::error::EmbeddingError;

/// Memoises embeddings by exact text within the process.
///
/// Failures are returned to the caller and never cached.
pub struct CachedEmbedder<E> {
    inner: E,
    cache: Cache<String, Vec<f32>>,
}

impl<E: Embedder> CachedEmbedder<E> {
    pub fn new(inner: E, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(capacity),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Approximate number of cached vectors.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl<E: Embedder> Embedder for CachedEmbedder<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if let Some(hit) = self.cache.get(text) {
            debug!(text_len = text.len(), "Embedding cache hit");
            return Ok(hit);
        }

        let embedding = self.inner.embed(text)?;
        self.cache.insert(text.to_string(), embedding.clone());
        Ok(embedding)
    }

    fn dim(&self) -> usize {
        self.inner.dim()
    }

    fn is_stub(&self) -> bool {
        self.inner.is_stub()
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for CachedEmbedder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedEmbedder")
            .field("inner", &self.inner)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
