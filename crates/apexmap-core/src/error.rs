//! Error types for loading and querying the topic graph

use thiserror::Error;

/// Raised only while loading a manifest. Any variant aborts the load
/// wholesale; a partially validated graph is never returned.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate topic name `{name}`")]
    DuplicateName { name: String },

    #[error("topics `{first}` and `{second}` both claim file `{file}`")]
    DuplicateFile {
        file: String,
        first: String,
        second: String,
    },

    #[error("topic `{topic}` references unknown topic `{target}` in `{field}`")]
    DanglingReference {
        topic: String,
        field: &'static str,
        target: String,
    },

    #[error("topic `{topic}` has invalid difficulty `{value}`")]
    InvalidDifficulty { topic: String, value: String },

    #[error("prerequisite cycle: {}", .cycle.join(" -> "))]
    CycleDetected {
        /// The offending cycle, closed (first name repeated last).
        cycle: Vec<String>,
    },
}

/// A lookup missed. Carries the requested key and which index was asked.
/// Expected outcome for callers, not an exceptional one; the graph stays
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("no topic named `{0}`")]
    Name(String),

    #[error("no topic for file `{0}`")]
    File(String),
}

impl NotFoundError {
    /// The key that missed.
    pub fn key(&self) -> &str {
        match self {
            Self::Name(k) | Self::File(k) => k,
        }
    }
}
