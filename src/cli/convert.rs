//! Whole-document conversion between TOML and JSON

use super::CliError;
use crate::json::{from_json_value, to_json_value};
use crate::output::{to_json, to_json_pretty};
use crate::Document;

/// Parse TOML text and render it as JSON.
pub fn toml_to_json(input: &str, pretty: bool) -> Result<String, CliError> {
    let doc = Document::parse(input)?;
    let value = to_json_value(&doc);
    let json = if pretty {
        to_json_pretty(&value)
    } else {
        to_json(&value)
    }?;
    Ok(json)
}

/// Parse a JSON object and render it as TOML.
pub fn json_to_toml(input: &str) -> Result<String, CliError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let doc = from_json_value(value)?;
    Ok(doc.render()?)
}
