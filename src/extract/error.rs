use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unsupported file format: {extension:?}")]
    UnsupportedFormat { extension: String },

    #[error("file is empty")]
    Empty,

    #[error("file too large: {size} bytes exceeds limit of {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("no text could be extracted from {extension} file")]
    NoText { extension: String },
}
