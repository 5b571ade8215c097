use std::fmt;

use indexmap::IndexMap;
use toml::value::Datetime;

/// Child nodes of a table, kept in document order.
pub type Table = IndexMap<String, Node>;

/// A node in a parsed TOML document.
///
/// # Examples
///
/// ```
/// use tq::{Node, Scalar, Table};
///
/// let mut server = Table::new();
/// server.insert("port".to_string(), Node::Leaf(Scalar::Integer(8080)));
///
/// let mut root = Table::new();
/// root.insert("server".to_string(), Node::Table(server));
/// let root = Node::Table(root);
///
/// assert!(root.as_table().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Key/value table (`[section]` or inline `{ ... }`)
    Table(Table),

    /// Array of tables or of scalars
    Array(Vec<Node>),

    /// Scalar value
    Leaf(Scalar),
}

/// A scalar leaf value, tagged with its TOML type.
///
/// The tag decides how raw input is coerced when the leaf is overwritten.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// UTF-8 string
    String(String),

    /// `true` / `false`
    Bool(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit float
    Float(f64),

    /// Offset/local date-time, local date or local time
    Datetime(Datetime),
}

/// The kind tag of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    String,
    Bool,
    Integer,
    Float,
    Datetime,
}

/// The shape of a [`Node`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Table,
    Array,
    Leaf(LeafKind),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Table(_) => NodeKind::Table,
            Node::Array(_) => NodeKind::Array,
            Node::Leaf(scalar) => NodeKind::Leaf(scalar.kind()),
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Node::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf(scalar) => Some(scalar),
            _ => None,
        }
    }
}

impl Scalar {
    pub fn kind(&self) -> LeafKind {
        match self {
            Scalar::String(_) => LeafKind::String,
            Scalar::Bool(_) => LeafKind::Bool,
            Scalar::Integer(_) => LeafKind::Integer,
            Scalar::Float(_) => LeafKind::Float,
            Scalar::Datetime(_) => LeafKind::Datetime,
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeafKind::String => "string",
            LeafKind::Bool => "bool",
            LeafKind::Integer => "int",
            LeafKind::Float => "float",
            LeafKind::Datetime => "datetime",
        };
        f.write_str(name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Table => f.write_str("table"),
            NodeKind::Array => f.write_str("array"),
            NodeKind::Leaf(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Leaf(scalar)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}
