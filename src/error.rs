use thiserror::Error;

use crate::path::Path;
use crate::value::{LeafKind, NodeKind};

/// Errors raised while resolving paths and applying scripts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The path does not address any node in the document
    #[error("path not found: {0}")]
    PathNotFound(Path),

    /// A set targeted a table or an array
    #[error("cannot set {path}: target is a {found}, not a scalar value")]
    NotALeaf { path: Path, found: NodeKind },

    /// Raw input does not parse as the kind already stored at the path
    #[error("cannot set {path}: expected {expected}, got {value:?}")]
    Coercion {
        path: Path,
        value: String,
        expected: LeafKind,
    },

    /// Gets and sets were requested in the same call
    #[error("set and get not allowed in same call")]
    MixedBatch,

    /// The path expression could not be split into keys
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}
