//! Cross-cutting, shared constants.
//!
//! Component configs take their defaults from here so the server, the library
//! and the tests agree on one set of tuning values.
//!
//! # Tuning knobs
//!
//! [`DEFAULT_MATCH_THRESHOLD`] and [`DEFAULT_MAX_SENTENCES`] are product decisions
//! rather than derived values. Both are overridable through [`crate::Config`];
//! call sites read them from their component config, never from these constants.

/// Cosine similarity a candidate must exceed to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.65;

/// Maximum sentences checked per document (bounds retrieval cost).
pub const DEFAULT_MAX_SENTENCES: usize = 12;

/// Maximum candidates scored per sentence.
pub const DEFAULT_MAX_CANDIDATES: usize = 3;

/// Minimum trimmed document length (chars) accepted by the detector.
pub const MIN_INPUT_CHARS: usize = 50;

/// A segment must be strictly longer than this many chars to be checked.
pub const MIN_SENTENCE_CHARS: usize = 40;

/// A segment must have strictly more than this many words to be checked.
pub const MIN_SENTENCE_WORDS: usize = 5;

/// Keywords are words strictly longer than this many chars.
pub const KEYWORD_MIN_LEN: usize = 3;

/// Maximum keywords used to build a retrieval query.
pub const MAX_QUERY_KEYWORDS: usize = 8;

/// Keyword count used for the single shortened-query retry.
pub const SHORT_QUERY_KEYWORDS: usize = 4;

/// Passages must be strictly longer than this to become candidates.
pub const MIN_PASSAGE_CHARS: usize = 100;

/// Passages are truncated to this many chars before scoring.
pub const MAX_PASSAGE_CHARS: usize = 1000;

/// Matched sentence text is truncated to this many chars for display.
pub const MATCH_DISPLAY_CHARS: usize = 300;

/// Document text is truncated to this many chars in the result.
pub const RESULT_TEXT_CHARS: usize = 10_000;

/// Per-call timeout for external sources.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 8_000;

/// Minimum delay between two outbound calls, across all sentences.
pub const DEFAULT_MIN_CALL_INTERVAL_MS: u64 = 250;

/// Sentence pipelines in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Upper bound on uploaded documents.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Embedding dimension of all-MiniLM-L6-v2.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Tokens considered per text by the embedding model.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Entries kept by the in-process embedding cache.
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 1024;

/// Label used when a candidate has no locator.
pub const FALLBACK_SOURCE_LABEL: &str = "Web source";

pub const DEFAULT_WIKIPEDIA_URL: &str = "https://en.wikipedia.org";
pub const DEFAULT_DUCKDUCKGO_URL: &str = "https://api.duckduckgo.com";
pub const DEFAULT_USER_AGENT: &str = concat!("plagcheck/", env!("CARGO_PKG_VERSION"));
