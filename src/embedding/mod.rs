//! Sentence embeddings.
//!
//! - [`Embedder`] is the seam the similarity scorer consumes.
//! - [`MiniLmEmbedder`] runs all-MiniLM-L6-v2 through candle, or a
//!   deterministic stub when no model directory is configured.
//! - [`CachedEmbedder`] memoises any embedder in process.

/// BERT encoder and mean pooling.
pub mod bert;
/// In-process embedding cache.
pub mod cached;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Embedder trait.
pub mod embedder;
mod error;
/// MiniLM sentence embedder.
pub mod minilm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Tokenizer loading helpers.
pub mod utils;


pub use cached::CachedEmbedder;
pub use embedder::{Embedder, SharedEmbedder, l2_normalize};
pub use error::EmbeddingError;
pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
