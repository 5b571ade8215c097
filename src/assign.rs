//! Typed assignment of raw strings to existing leaves.
//!
//! The kind of the value already stored at a path decides how the new raw
//! text is parsed. Numeric, boolean and date-time input is trimmed before
//! parsing; string input is stored verbatim, surrounding spaces included.

use toml::value::Datetime;
use tracing::debug;

use crate::error::QueryError;
use crate::path::Path;
use crate::resolve::resolve_mut;
use crate::value::{LeafKind, Node, Scalar};

/// Parse `raw` into a scalar of `kind`.
///
/// Returns `None` when the text is not a valid literal for that kind.
///
/// # Examples
///
/// ```
/// use tq::{LeafKind, Scalar, coerce};
///
/// assert_eq!(coerce(LeafKind::Integer, " 42 "), Some(Scalar::Integer(42)));
/// assert_eq!(coerce(LeafKind::String, " hi "), Some(Scalar::String(" hi ".into())));
/// assert_eq!(coerce(LeafKind::Bool, "yes"), None);
/// ```
pub fn coerce(kind: LeafKind, raw: &str) -> Option<Scalar> {
    let trimmed = raw.trim();
    match kind {
        LeafKind::String => Some(Scalar::String(raw.to_string())),
        LeafKind::Integer => trimmed.parse::<i64>().ok().map(Scalar::Integer),
        LeafKind::Float => trimmed.parse::<f64>().ok().map(Scalar::Float),
        LeafKind::Bool => parse_bool(trimmed).map(Scalar::Bool),
        LeafKind::Datetime => trimmed.parse::<Datetime>().ok().map(Scalar::Datetime),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Overwrite the leaf at `path` with `raw`, coerced to the leaf's kind.
///
/// The path must already exist and address a scalar. On failure the tree is
/// left untouched.
///
/// # Examples
///
/// ```
/// use tq::{Document, Path, QueryError, Scalar, assign, resolve};
///
/// let mut doc = Document::parse("[a.b]\nc = 5\n").unwrap();
/// let path = Path::parse("a.b.c").unwrap();
///
/// assign(doc.root_mut(), &path, "42").unwrap();
/// assert_eq!(resolve(doc.root(), &path).unwrap().as_scalar(), Some(&Scalar::Integer(42)));
///
/// let err = assign(doc.root_mut(), &path, "abc").unwrap_err();
/// assert!(matches!(err, QueryError::Coercion { .. }));
/// ```
pub fn assign(root: &mut Node, path: &Path, raw: &str) -> Result<(), QueryError> {
    let node = resolve_mut(root, path)?;
    let found = node.kind();
    let Node::Leaf(scalar) = node else {
        return Err(QueryError::NotALeaf {
            path: path.clone(),
            found,
        });
    };

    let expected = scalar.kind();
    let value = coerce(expected, raw).ok_or_else(|| QueryError::Coercion {
        path: path.clone(),
        value: raw.to_string(),
        expected,
    })?;

    debug!(%path, kind = %expected, "assigned value");
    *scalar = value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_accepts_short_and_numeric_forms() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(coerce(LeafKind::Bool, raw), Some(Scalar::Bool(true)), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(coerce(LeafKind::Bool, raw), Some(Scalar::Bool(false)), "{raw}");
        }
        for raw in ["yes", "no", "tRuE", ""] {
            assert_eq!(coerce(LeafKind::Bool, raw), None, "{raw}");
        }
    }

    #[test]
    fn integer_rejects_floats_and_radix_prefixes() {
        assert_eq!(coerce(LeafKind::Integer, "-7"), Some(Scalar::Integer(-7)));
        assert_eq!(coerce(LeafKind::Integer, "+7"), Some(Scalar::Integer(7)));
        assert_eq!(coerce(LeafKind::Integer, "1.5"), None);
        assert_eq!(coerce(LeafKind::Integer, "0x10"), None);
        assert_eq!(coerce(LeafKind::Integer, "99999999999999999999"), None);
    }

    #[test]
    fn float_accepts_scientific_notation() {
        assert_eq!(coerce(LeafKind::Float, "6.02e23"), Some(Scalar::Float(6.02e23)));
        assert_eq!(coerce(LeafKind::Float, " 3 "), Some(Scalar::Float(3.0)));
        assert_eq!(coerce(LeafKind::Float, "pi"), None);
    }

    #[test]
    fn datetime_parses_toml_literals() {
        let value = coerce(LeafKind::Datetime, " 1979-05-27T07:32:00Z ").unwrap();
        assert_eq!(value.kind(), LeafKind::Datetime);
        assert_eq!(coerce(LeafKind::Datetime, "yesterday"), None);
    }
}
