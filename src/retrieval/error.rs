use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from a single call to an external knowledge source.
pub enum RetrievalError {
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("{origin} returned HTTP {status}")]
    Status {
        /// Source name.
        origin: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The call did not complete within the per-call timeout.
    #[error("{origin} timed out after {timeout_ms}ms")]
    Timeout {
        /// Source name.
        origin: &'static str,
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The response body could not be decoded.
    #[error("failed to parse {origin} response: {reason}")]
    Parse {
        /// Source name.
        origin: &'static str,
        /// Decoder message.
        reason: String,
    },

    /// The source refused or could not serve the request.
    #[error("{origin} unavailable: {reason}")]
    Unavailable {
        /// Source name.
        origin: &'static str,
        /// Error message.
        reason: String,
    },
}

/// Convenience result type for retrieval operations.
pub type RetrievalResult<T> = Result<T, RetrievalError>;
