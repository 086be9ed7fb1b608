use std::future::Future;

use super::error::RetrievalResult;
use super::types::{Passage, WebAnswer};

/// Encyclopedic index searched by keyword query.
///
/// Both calls are best-effort: an empty result is a normal answer.
pub trait PrimarySource: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Returns ranked page titles (best first), at most `limit`.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = RetrievalResult<Vec<String>>> + Send;

    /// Fetches a plain-text summary for a title, or `None` if it has none.
    fn fetch_extract(
        &self,
        title: &str,
    ) -> impl Future<Output = RetrievalResult<Option<Passage>>> + Send;
}

/// General web index returning an abstract and related snippets.
pub trait SecondarySource: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn lookup(&self, query: &str) -> impl Future<Output = RetrievalResult<WebAnswer>> + Send;
}
