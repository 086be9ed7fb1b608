//! End-to-end document check.
//!
//! [`Detector::check_document`] is the single entry point the HTTP layer calls.
//! Sentences are processed independently, up to
//! [`DetectorConfig::concurrency`] at a time; failures stay isolated to the
//! sentence they occur in.

pub mod config;
pub mod detector;
pub mod error;


pub use config::DetectorConfig;
pub use detector::Detector;
pub use error::DetectionError;
