//! Core data structures for the topic graph

use serde::{Deserialize, Serialize};

/// How hard a topic is, coarsely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documentation unit: metadata plus graph edges to other topics.
///
/// The markdown body the `file` field points at is an opaque payload; the
/// graph returns it verbatim and never parses it. Edge lists keep their
/// declaration order from the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    /// Unique, case-sensitive key.
    pub name: String,
    /// Path of the markdown body, relative to the corpus root. One topic
    /// per file.
    pub file: String,
    /// Advisory cross-references. Directed: A listing B does not make B
    /// list A.
    pub related: Vec<String>,
    /// Topics to understand first, in suggested reading order.
    pub prerequisites: Vec<String>,
    /// Suggested next topics.
    pub leads_to: Vec<String>,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub use_cases: Vec<String>,
}

impl Topic {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_use_case(&self, use_case: &str) -> bool {
        self.use_cases.iter().any(|u| u == use_case)
    }
}

/// What kind of relationship an edge represents.
///
/// Direction per kind: `Prerequisite` points from the prerequisite to the
/// topic that requires it; `LeadsTo` and `Related` point from the declaring
/// topic to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Prerequisite,
    LeadsTo,
    Related,
}

impl EdgeKind {
    /// The manifest field this edge kind is declared in.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Prerequisite => "prerequisites",
            Self::LeadsTo => "leads_to",
            Self::Related => "related",
        }
    }
}

/// Manifest-level metadata, carried through from the source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestInfo {
    pub name: String,
    pub description: String,
    pub version: String,
    /// Body to surface when no topic is named.
    pub default_doc: String,
    /// Informational count from the source; never cross-checked against
    /// the bodies.
    pub total_snippets: u64,
}
