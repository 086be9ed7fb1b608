use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Retrieval tier that produced a candidate.
pub enum Provenance {
    /// Encyclopedic / academic index, tried first.
    Primary,
    /// General web index, used to supplement thin primary results.
    Secondary,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Primary => write!(f, "primary"),
            Provenance::Secondary => write!(f, "secondary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A retrieved passage considered as a possible source of a sentence.
pub struct Candidate {
    /// Passage text, already bounded in length.
    pub text: String,
    /// URL or source name.
    pub locator: String,
    /// Which tier produced it.
    pub provenance: Provenance,
}

impl Candidate {
    pub fn new(text: impl Into<String>, locator: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            text: text.into(),
            locator: locator.into(),
            provenance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Raw passage as returned by a source, before length policy is applied.
pub struct Passage {
    pub text: String,
    pub locator: String,
}

impl Passage {
    pub fn new(text: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locator: locator.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Answer from a secondary web source: one abstract plus related snippets.
pub struct WebAnswer {
    /// Main abstract (may be empty).
    pub abstract_passage: Passage,
    /// Related-topic snippets, in source order.
    pub related: Vec<Passage>,
}
