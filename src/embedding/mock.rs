//! Scripted embedder for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::embedder::Embedder;
use super::error::EmbeddingError;

/// Returns registered vectors and a zero vector for anything else.
///
/// Keys are matched case-insensitively after trimming, the same way the
/// similarity scorer normalises its inputs.
#[derive(Debug)]
pub struct MockEmbedder {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
    failing_texts: HashSet<String>,
    failing: bool,
    calls: AtomicUsize,
}

fn key(text: &str) -> String {
    text.trim().to_lowercase()
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: HashMap::new(),
            failing_texts: HashSet::new(),
            failing: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Registers the vector returned for `text`. Panics on a dimension mismatch.
    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "mock vector has wrong dimension");
        self.vectors.insert(key(text), vector);
        self
    }

    /// Embedding `text` fails.
    pub fn with_failure(mut self, text: &str) -> Self {
        self.failing_texts.insert(key(text));
        self
    }

    /// Every embedding fails.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = key(text);
        if self.failing || self.failing_texts.contains(&key) {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock embedder configured to fail".to_string(),
            });
        }
        Ok(self
            .vectors
            .get(&key)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dim]))
    }

    fn dim(&self) -> usize {
        self.dim
    }
}
