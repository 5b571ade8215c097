//! Dotted key paths.
//!
//! A [`Path`] addresses a node by table keys, starting at the document root:
//!
//! - `server.port` → `["server", "port"]`
//! - `servers."alpha.example".ip` → `["servers", "alpha.example", "ip"]`
//! - `` (empty) → `[]`, the root itself
//!
//! Arrays are only reachable as whole values; there is no index syntax.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// A sequence of table keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// The zero-length path, which resolves to the root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a dotted path expression.
    ///
    /// Bare keys are trimmed. A key may be double-quoted to include dots or
    /// surrounding spaces; `\"` and `\\` are the only escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tq::Path;
    ///
    /// let path = Path::parse("a.\"b.c\". d").unwrap();
    /// assert_eq!(path.segments(), ["a", "b.c", "d"]);
    ///
    /// assert!(Path::parse("").unwrap().is_empty());
    /// assert!(Path::parse("a..b").is_err());
    /// ```
    pub fn parse(expr: &str) -> Result<Self, QueryError> {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let invalid = |reason: &'static str| QueryError::InvalidPath {
            path: trimmed.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut chars = trimmed.chars().peekable();
        loop {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}

            if chars.next_if_eq(&'"').is_some() {
                let mut segment = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => segment.push(c),
                            Some(c) => {
                                segment.push('\\');
                                segment.push(c);
                            }
                            None => return Err(invalid("unterminated quoted key")),
                        },
                        Some(c) => segment.push(c),
                        None => return Err(invalid("unterminated quoted key")),
                    }
                }
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                if chars.peek().is_some_and(|&c| c != '.') {
                    return Err(invalid("unexpected character after quoted key"));
                }
                segments.push(segment);
            } else {
                let mut segment = String::new();
                while let Some(c) = chars.next_if(|&c| c != '.') {
                    segment.push(c);
                }
                let segment = segment.trim_end();
                if segment.is_empty() {
                    return Err(invalid("empty key"));
                }
                segments.push(segment.to_string());
            }

            // Only `.` or the end of input can follow a key here.
            if chars.next().is_none() {
                break;
            }
        }

        Ok(Self(segments))
    }
}

impl FromStr for Path {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if is_bare_key(segment) {
                f.write_str(segment)?;
            } else {
                write!(f, "\"{}\"", segment.replace('\\', "\\\\").replace('"', "\\\""))?;
            }
        }
        Ok(())
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_non_bare_keys() {
        let path = Path::from(&["servers", "alpha.example", "ip"][..]);
        assert_eq!(path.to_string(), "servers.\"alpha.example\".ip");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let path = Path::from(&["a b", "say \"hi\"", "c"][..]);
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
    }

    #[test]
    fn quoted_key_must_be_followed_by_dot() {
        assert!(matches!(
            Path::parse("\"a\"b"),
            Err(QueryError::InvalidPath { .. })
        ));
    }
}
