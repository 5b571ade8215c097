//! Path resolution over a document tree.
//!
//! Resolution walks table keys from the root and never creates nodes. A path
//! that steps into a non-table, or names a missing key, is not found.

use tracing::trace;

use crate::error::QueryError;
use crate::path::Path;
use crate::value::Node;

/// Resolve `path` against `root`.
///
/// Returns the addressed node, which may be a table, an array or a leaf.
/// The empty path resolves to `root` itself.
///
/// # Examples
///
/// ```
/// use tq::{Document, Path, Scalar, resolve};
///
/// let doc = Document::parse("[a.b]\nc = 5\n").unwrap();
/// let node = resolve(doc.root(), &Path::parse("a.b.c").unwrap()).unwrap();
/// assert_eq!(node.as_scalar(), Some(&Scalar::Integer(5)));
///
/// assert!(resolve(doc.root(), &Path::parse("a.x").unwrap()).is_err());
/// ```
pub fn resolve<'a>(root: &'a Node, path: &Path) -> Result<&'a Node, QueryError> {
    let mut current = root;
    for (depth, key) in path.segments().iter().enumerate() {
        trace!(depth, key = key.as_str(), "resolve step");
        current = match current {
            Node::Table(table) => table.get(key),
            Node::Array(_) | Node::Leaf(_) => None,
        }
        .ok_or_else(|| QueryError::PathNotFound(path.clone()))?;
    }
    Ok(current)
}

/// Mutable twin of [`resolve`], used to write a leaf in place.
pub fn resolve_mut<'a>(root: &'a mut Node, path: &Path) -> Result<&'a mut Node, QueryError> {
    let mut current = root;
    for (depth, key) in path.segments().iter().enumerate() {
        trace!(depth, key = key.as_str(), "resolve step");
        current = match current {
            Node::Table(table) => table.get_mut(key),
            Node::Array(_) | Node::Leaf(_) => None,
        }
        .ok_or_else(|| QueryError::PathNotFound(path.clone()))?;
    }
    Ok(current)
}
