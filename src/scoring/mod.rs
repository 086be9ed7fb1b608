//! Similarity scoring and per-sentence match decisions.
//!
//! [`SimilarityScorer`] turns two texts into a score in `[0, 1]` through an
//! [`Embedder`](crate::embedding::Embedder). It fails soft: an embedding error
//! scores `0.0` and is logged, so one bad candidate cannot sink a sentence.
//!
//! [`MatchDecider`] scores every candidate of a sentence and keeps the best one
//! strictly above the threshold. At most one [`Match`] is produced per sentence.

pub mod decider;
pub mod error;
pub mod similarity;
pub mod types;


pub use decider::MatchDecider;
pub use error::ScoringError;
pub use similarity::{SimilarityScorer, cosine_similarity};
pub use types::{Match, ScoredCandidate, Verdict};
