//! JSON <-> document conversion utilities
//!
//! JSON has a single number type and no date-time type, so a round trip
//! through JSON can change a leaf's kind: date-times come back as strings, and
//! a float written by another tool as `5` comes back as an integer.

use thiserror::Error;

use crate::document::Document;
use crate::path::Path;
use crate::value::{Node, Scalar, Table};

/// Errors converting JSON into a TOML document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonError {
    /// TOML has no null value
    #[error("null at {0} has no toml representation")]
    Null(Path),

    /// A TOML document is always a table
    #[error("top-level json value must be an object")]
    NotAnObject,
}

/// Convert a document to a `serde_json::Value` object.
pub fn to_json_value(doc: &Document) -> serde_json::Value {
    node_to_json(doc.root())
}

/// Convert a node to `serde_json::Value`
pub fn node_to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), node_to_json(v)))
                .collect(),
        ),
        Node::Array(items) => serde_json::Value::Array(items.iter().map(node_to_json).collect()),
        Node::Leaf(scalar) => scalar_to_json(scalar),
    }
}

fn scalar_to_json(scalar: &Scalar) -> serde_json::Value {
    match scalar {
        Scalar::String(s) => serde_json::Value::String(s.clone()),
        Scalar::Bool(b) => serde_json::Value::Bool(*b),
        Scalar::Integer(i) => serde_json::Value::Number((*i).into()),
        Scalar::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Scalar::Datetime(dt) => serde_json::Value::String(dt.to_string()),
    }
}

/// Convert a `serde_json::Value` object into a document.
///
/// # Examples
///
/// ```
/// use tq::json::from_json_value;
/// use tq::{Path, Scalar};
///
/// let doc = from_json_value(serde_json::json!({"server": {"port": 8080}})).unwrap();
/// let port = doc.get(&Path::parse("server.port").unwrap()).unwrap();
/// assert_eq!(port.as_scalar(), Some(&Scalar::Integer(8080)));
/// ```
pub fn from_json_value(value: serde_json::Value) -> Result<Document, JsonError> {
    match value {
        serde_json::Value::Object(obj) => {
            let mut path = Vec::new();
            Ok(Document::from_table(table_from_json(obj, &mut path)?))
        }
        _ => Err(JsonError::NotAnObject),
    }
}

fn table_from_json(
    obj: serde_json::Map<String, serde_json::Value>,
    path: &mut Vec<String>,
) -> Result<Table, JsonError> {
    let mut table = Table::with_capacity(obj.len());
    for (key, value) in obj {
        path.push(key.clone());
        let node = node_from_json(value, path)?;
        path.pop();
        table.insert(key, node);
    }
    Ok(table)
}

fn node_from_json(value: serde_json::Value, path: &mut Vec<String>) -> Result<Node, JsonError> {
    let node = match value {
        serde_json::Value::Null => return Err(JsonError::Null(Path::new(path.clone()))),
        serde_json::Value::Bool(b) => Node::Leaf(Scalar::Bool(b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Node::Leaf(Scalar::Integer(i)),
            // u64 beyond i64::MAX and every non-integer land here
            None => Node::Leaf(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        serde_json::Value::String(s) => Node::Leaf(Scalar::String(s)),
        serde_json::Value::Array(items) => Node::Array(
            items
                .into_iter()
                .map(|item| node_from_json(item, path))
                .collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(obj) => Node::Table(table_from_json(obj, path)?),
    };
    Ok(node)
}
