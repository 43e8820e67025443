//! Verbatim access to documentation bodies
//!
//! Bodies are opaque payloads. The graph resolves their paths and returns
//! their text exactly as stored; nothing here parses or indexes markdown.

use crate::model::{ManifestInfo, Topic};
use std::path::{Path, PathBuf};

/// Path of a topic's body, resolved against the corpus root (usually the
/// directory holding the manifest).
pub fn body_path(root: &Path, topic: &Topic) -> PathBuf {
    root.join(&topic.file)
}

/// Path of the manifest's default body.
pub fn default_doc_path(root: &Path, info: &ManifestInfo) -> PathBuf {
    root.join(&info.default_doc)
}

/// Read a topic's body verbatim.
pub fn read_body(root: &Path, topic: &Topic) -> std::io::Result<String> {
    let path = body_path(root, topic);
    tracing::debug!("reading body for `{}` from {}", topic.name, path.display());
    std::fs::read_to_string(path)
}
