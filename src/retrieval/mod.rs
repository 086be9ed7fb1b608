//! Candidate retrieval from external knowledge sources.
//!
//! For each sentence the [`CandidateRetriever`] asks a primary encyclopedic
//! source first and a general web source only when the primary answer is thin.
//! A single shortened-query retry against the primary source covers queries
//! that were too specific to match anything.
//!
//! # Failure policy
//!
//! Every outbound call returns a [`RetrievalResult`]. The `try_*` methods
//! propagate those errors; [`CandidateRetriever::retrieve`] is the one place
//! that turns an unavailable source into "no candidates from that source".
//! A sentence therefore always gets a (possibly empty) candidate list, and one
//! failing source never aborts the document check.
//!
//! # Politeness
//!
//! All calls, from every concurrently running sentence, pass through one
//! shared [`MinIntervalGate`] before hitting the network.

pub mod config;
pub mod duckduckgo;
pub mod error;
pub mod gate;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod retriever;
pub mod source;
pub mod types;
pub mod wikipedia;


pub use config::RetrieverConfig;
pub use duckduckgo::DuckDuckGoClient;
pub use error::{RetrievalError, RetrievalResult};
pub use gate::MinIntervalGate;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockPrimarySource, MockSecondarySource};
pub use retriever::CandidateRetriever;
pub use source::{PrimarySource, SecondarySource};
pub use types::{Candidate, Passage, Provenance, WebAnswer};
pub use wikipedia::WikipediaClient;
