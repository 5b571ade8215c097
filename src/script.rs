//! Get/set script batches.
//!
//! Each script line is either a get (`server.port`) or a set
//! (`server.port = 9090`), split on the first `=`. One call runs only gets or
//! only sets; mixing them is rejected before anything is resolved.

use tracing::debug;

use crate::document::Document;
use crate::error::QueryError;
use crate::path::Path;
use crate::value::Node;

/// A single `path = raw` write.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub path: Path,
    /// Everything after the first `=`, untrimmed
    pub raw: String,
}

/// The classified scripts of one call.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch {
    Get(Vec<Path>),
    Set(Vec<Assignment>),
}

impl Batch {
    /// Classify script lines into a get batch or a set batch.
    ///
    /// An empty list is an empty set batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use tq::{Batch, QueryError};
    ///
    /// let batch = Batch::classify(&["a.b", "c"]).unwrap();
    /// assert!(matches!(batch, Batch::Get(paths) if paths.len() == 2));
    ///
    /// let batch = Batch::classify(&["url = http://x/?q=1"]).unwrap();
    /// let Batch::Set(sets) = batch else { unreachable!() };
    /// assert_eq!(sets[0].raw, " http://x/?q=1");
    ///
    /// assert_eq!(Batch::classify(&["a.b", "c.d=5"]), Err(QueryError::MixedBatch));
    /// ```
    pub fn classify<S: AsRef<str>>(scripts: &[S]) -> Result<Self, QueryError> {
        let sets = scripts.iter().filter(|s| s.as_ref().contains('=')).count();
        if sets > 0 && sets < scripts.len() {
            return Err(QueryError::MixedBatch);
        }

        if sets == 0 && !scripts.is_empty() {
            let paths = scripts
                .iter()
                .map(|s| Path::parse(s.as_ref()))
                .collect::<Result<_, _>>()?;
            return Ok(Batch::Get(paths));
        }

        let assignments = scripts
            .iter()
            .filter_map(|s| s.as_ref().split_once('='))
            .map(|(path, raw)| {
                Ok(Assignment {
                    path: Path::parse(path)?,
                    raw: raw.to_string(),
                })
            })
            .collect::<Result<_, QueryError>>()?;
        Ok(Batch::Set(assignments))
    }
}

/// Resolve every path, in order, stopping at the first one not found.
pub fn get_all<'a>(doc: &'a Document, paths: &[Path]) -> Result<Vec<&'a Node>, QueryError> {
    debug!(count = paths.len(), "running get batch");
    paths.iter().map(|path| doc.get(path)).collect()
}

/// Apply every assignment, in order, stopping at the first failure.
///
/// Assignments before the failing one stay applied.
pub fn set_all(doc: &mut Document, assignments: &[Assignment]) -> Result<(), QueryError> {
    debug!(count = assignments.len(), "running set batch");
    for assignment in assignments {
        doc.set(&assignment.path, &assignment.raw)?;
    }
    Ok(())
}
