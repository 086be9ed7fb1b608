use thiserror::Error;

use crate::segment::SegmentError;

/// Precondition failures of a document check.
///
/// Everything else (source outages, embedding failures) is absorbed and only
/// shows up as fewer matches.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectionError {
    #[error("text too short: {len} characters after trimming, at least {min} required")]
    InputTooShort { len: usize, min: usize },

    #[error("no checkable sentences in text")]
    EmptyInput,

    #[error("invalid detector configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<SegmentError> for DetectionError {
    fn from(err: SegmentError) -> Self {
        match err {
            SegmentError::NoSentences => DetectionError::EmptyInput,
            SegmentError::InvalidConfig { reason } => DetectionError::InvalidConfig { reason },
        }
    }
}
