//! tq: query, edit, and convert TOML documents.
//!
//! A document is parsed into a tree of [`Node`]s. Dotted [`Path`]s address
//! nodes by table key; [`resolve`] reads them and [`assign`] overwrites a
//! scalar leaf, parsing the new text as the kind already stored there.

pub mod assign;
pub mod cli;
pub mod document;
pub mod error;
pub mod json;
pub mod output;
pub mod path;
pub mod resolve;
pub mod script;
pub mod value;

pub use assign::{assign, coerce};
pub use document::{Document, DocumentError};
pub use error::QueryError;
pub use json::JsonError;
pub use path::Path;
pub use resolve::{resolve, resolve_mut};
pub use script::{Assignment, Batch};
pub use value::{LeafKind, Node, NodeKind, Scalar, Table};
