use std::sync::Arc;

use plagcheck::embedding::Embedder;
use plagcheck::pipeline::Detector;
use plagcheck::retrieval::{PrimarySource, SecondarySource};

/// Shared handler state: one long-lived detector for all requests.
pub struct HandlerState<P, S, E> {
    pub detector: Arc<Detector<P, S, E>>,
}

impl<P, S, E> HandlerState<P, S, E>
where
    P: PrimarySource + 'static,
    S: SecondarySource + 'static,
    E: Embedder + 'static,
{
    pub fn new(detector: Detector<P, S, E>) -> Self {
        Self {
            detector: Arc::new(detector),
        }
    }

    /// `"stub"` when similarity scores carry no meaning, else `"real"`.
    pub fn embedder_mode(&self) -> &'static str {
        if self.detector.scorer().embedder().is_stub() {
            "stub"
        } else {
            "real"
        }
    }
}

// Manual impl: `derive` would require `P: Clone` etc.
impl<P, S, E> Clone for HandlerState<P, S, E> {
    fn clone(&self) -> Self {
        Self {
            detector: Arc::clone(&self.detector),
        }
    }
}
