//! TOML text ↔ tree conversion.
//!
//! Parsing and rendering are delegated to the `toml` crate; this module maps
//! its values onto [`Node`] so the rest of the crate works on one tree type.

use thiserror::Error;

use crate::assign::assign;
use crate::error::QueryError;
use crate::path::Path;
use crate::resolve::resolve;
use crate::value::{Node, Scalar, Table};

/// Errors reading or writing TOML text.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to load toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render toml: {0}")]
    Render(#[from] toml::ser::Error),
}

/// A parsed TOML document.
///
/// Parsing and JSON conversion always produce a table root.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let table: toml::Table = toml::from_str(text)?;
        Ok(Self::from_table(table_from_toml(table)))
    }

    pub fn from_table(table: Table) -> Self {
        Self {
            root: Node::Table(table),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Resolve `path` from the root.
    pub fn get(&self, path: &Path) -> Result<&Node, QueryError> {
        resolve(&self.root, path)
    }

    /// Overwrite the leaf at `path`, keeping its kind.
    pub fn set(&mut self, path: &Path, raw: &str) -> Result<(), QueryError> {
        assign(&mut self.root, path, raw)
    }

    /// Render the document as TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tq::{Document, Path};
    ///
    /// let mut doc = Document::parse("title = \"old\"\n").unwrap();
    /// doc.set(&Path::parse("title").unwrap(), "new").unwrap();
    /// assert_eq!(doc.render().unwrap(), "title = \"new\"\n");
    /// ```
    pub fn render(&self) -> Result<String, DocumentError> {
        let rendered = match node_to_toml(&self.root) {
            toml::Value::Table(table) => toml::to_string(&table)?,
            other => toml::to_string(&other)?,
        };
        Ok(rendered)
    }
}

pub(crate) fn node_from_toml(value: toml::Value) -> Node {
    match value {
        toml::Value::String(s) => Node::Leaf(Scalar::String(s)),
        toml::Value::Integer(i) => Node::Leaf(Scalar::Integer(i)),
        toml::Value::Float(f) => Node::Leaf(Scalar::Float(f)),
        toml::Value::Boolean(b) => Node::Leaf(Scalar::Bool(b)),
        toml::Value::Datetime(dt) => Node::Leaf(Scalar::Datetime(dt)),
        toml::Value::Array(items) => Node::Array(items.into_iter().map(node_from_toml).collect()),
        toml::Value::Table(table) => Node::Table(table_from_toml(table)),
    }
}

pub(crate) fn table_from_toml(table: toml::Table) -> Table {
    table
        .into_iter()
        .map(|(k, v)| (k, node_from_toml(v)))
        .collect()
}

pub(crate) fn node_to_toml(node: &Node) -> toml::Value {
    match node {
        Node::Table(table) => toml::Value::Table(table_to_toml(table)),
        Node::Array(items) => toml::Value::Array(items.iter().map(node_to_toml).collect()),
        Node::Leaf(scalar) => scalar_to_toml(scalar),
    }
}

pub(crate) fn scalar_to_toml(scalar: &Scalar) -> toml::Value {
    match scalar {
        Scalar::String(s) => toml::Value::String(s.clone()),
        Scalar::Bool(b) => toml::Value::Boolean(*b),
        Scalar::Integer(i) => toml::Value::Integer(*i),
        Scalar::Float(f) => toml::Value::Float(*f),
        Scalar::Datetime(dt) => toml::Value::Datetime(*dt),
    }
}

pub(crate) fn table_to_toml(table: &Table) -> toml::Table {
    table
        .iter()
        .map(|(k, v)| (k.clone(), node_to_toml(v)))
        .collect()
}
