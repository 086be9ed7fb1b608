//! Plagcheck library crate (used by the server and integration tests).
//!
//! Estimates how much of a document duplicates public content. The pipeline is
//! leaf-first:
//!
//! 1. [`Segmenter`] splits text into a bounded list of checkable [`Sentence`]s.
//! 2. [`CandidateRetriever`] asks Wikipedia, then DuckDuckGo, for passages.
//! 3. [`SimilarityScorer`] embeds sentence and passage and compares them.
//! 4. [`MatchDecider`] keeps the best candidate above the threshold.
//! 5. [`aggregate`] turns matches into plagiarism / originality scores.
//!
//! [`Detector`] wires these together behind
//! [`check_document`](Detector::check_document).
//!
//! ## Failure model
//! Only [`DetectionError::InputTooShort`] and [`DetectionError::EmptyInput`]
//! reach the caller. Source outages and embedding failures degrade to fewer
//! candidates or a `0.0` score and are logged with `tracing`.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod extract;
pub mod pipeline;
pub mod retrieval;
pub mod scoring;
pub mod segment;
pub mod utils;

pub use aggregate::{DetectionResult, aggregate};
pub use config::{Config, ConfigError};
pub use embedding::{
    CachedEmbedder, Embedder, EmbeddingError, MINILM_EMBEDDING_DIM, MiniLmConfig, MiniLmEmbedder,
    SharedEmbedder,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use extract::{ExtractError, clean_text, extension_of, extract_text};
pub use pipeline::{DetectionError, Detector, DetectorConfig};
pub use retrieval::{
    Candidate, CandidateRetriever, DuckDuckGoClient, MinIntervalGate, Passage, PrimarySource,
    Provenance, RetrievalError, RetrievalResult, RetrieverConfig, SecondarySource, WebAnswer,
    WikipediaClient,
};
#[cfg(any(test, feature = "mock"))]
pub use retrieval::{MockPrimarySource, MockSecondarySource};
pub use scoring::{Match, MatchDecider, ScoringError, SimilarityScorer, Verdict, cosine_similarity};
pub use segment::{Segmenter, SegmenterConfig, Sentence};

/// Detector over the public web sources.
pub type WebDetector = Detector<WikipediaClient, DuckDuckGoClient, SharedEmbedder>;
