//! Apexmap Core — topic manifest model, validation, and query operations
//!
//! Loads a documentation manifest into an immutable topic graph:
//! deserialization and every validation pass run eagerly at load time, and
//! the resulting [`TopicGraph`] answers lookups, prerequisite closures,
//! learning paths, and filters without ever mutating.

pub mod docs;
pub mod error;
pub mod graph;
pub mod manifest;
pub mod model;


#[cfg(test)]
pub mod test_utils;

pub use error::{NotFoundError, ValidationError};
pub use graph::TopicGraph;
pub use model::{Difficulty, EdgeKind, ManifestInfo, Topic};
