//! Textual output for query results and JSON conversion.
//!
//! Get results print the way a user would write them in a TOML file, except
//! strings, which print as their raw text:
//!
//! | node     | output                          |
//! |----------|---------------------------------|
//! | string   | `hello`                         |
//! | int      | `5`                             |
//! | float    | `1.5`, `3.0`                    |
//! | bool     | `true`                          |
//! | datetime | `1979-05-27T07:32:00Z`          |
//! | array    | `[1, 2, 3]`                     |
//! | table    | TOML body, e.g. `port = 8080`   |
//!
//! A table's body is rendered relative to that table: getting `server` from a
//! document with `[server.tls]` prints the child under a `[tls]` header.
//!
//! # Examples
//!
//! ```
//! use tq::{Document, Path};
//! use tq::output::format_node;
//!
//! let doc = Document::parse("ports = [80, 443]\nname = \"web\"\n").unwrap();
//!
//! let ports = doc.get(&Path::parse("ports").unwrap()).unwrap();
//! assert_eq!(format_node(ports).unwrap(), "[80, 443]");
//!
//! let name = doc.get(&Path::parse("name").unwrap()).unwrap();
//! assert_eq!(format_node(name).unwrap(), "web");
//! ```

use crate::document::{DocumentError, node_to_toml, table_to_toml};
use crate::value::{Node, Scalar};

/// Format a resolved node for display as a get result.
pub fn format_node(node: &Node) -> Result<String, DocumentError> {
    let text = match node {
        Node::Leaf(Scalar::String(s)) => s.clone(),
        // A bare toml datetime value displays as its serde marker table
        Node::Leaf(Scalar::Datetime(dt)) => dt.to_string(),
        Node::Table(table) => {
            let rendered = toml::to_string(&table_to_toml(table))?;
            rendered.trim_end_matches('\n').to_string()
        }
        Node::Array(_) | Node::Leaf(_) => node_to_toml(node).to_string(),
    };
    Ok(text)
}

/// Converts a JSON value to compact text, e.g. `{"a":1}`.
pub fn to_json(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Converts a JSON value to text with 2-space indentation.
pub fn to_json_pretty(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, Path};

    fn get(doc: &str, expr: &str) -> String {
        let doc = Document::parse(doc).unwrap();
        format_node(doc.get(&Path::parse(expr).unwrap()).unwrap()).unwrap()
    }

    #[test]
    fn scalars_print_as_literals() {
        let doc = "s = \" hi \"\ni = -5\nf = 3.0\ng = 1.5\nb = true\n\
                   odt = 1979-05-27T07:32:00Z\nld = 1979-05-27\nlt = 07:32:00\n";
        assert_eq!(get(doc, "s"), " hi ");
        assert_eq!(get(doc, "i"), "-5");
        assert_eq!(get(doc, "f"), "3.0");
        assert_eq!(get(doc, "g"), "1.5");
        assert_eq!(get(doc, "b"), "true");
        assert_eq!(get(doc, "odt"), "1979-05-27T07:32:00Z");
        assert_eq!(get(doc, "ld"), "1979-05-27");
        assert_eq!(get(doc, "lt"), "07:32:00");
    }

    #[test]
    fn arrays_print_inline() {
        assert_eq!(get("ds = [1979-05-27, 2024-01-02]\n", "ds"), "[1979-05-27, 2024-01-02]");
    }

    #[test]
    fn table_headers_are_relative_to_the_table() {
        let doc = "[x]\ny = 'hi'\n\n[x.z]\nq = 1.5\n";
        assert_eq!(get(doc, "x"), "y = \"hi\"\n\n[z]\nq = 1.5");
    }
}
