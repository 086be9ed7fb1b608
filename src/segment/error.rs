use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// Nothing in the document looked like checkable prose.
    #[error("no sentences survived segmentation")]
    NoSentences,

    #[error("invalid segmenter configuration: {reason}")]
    InvalidConfig { reason: String },
}
