//! Run get/set scripts against a TOML document

use std::fs;
use std::path::Path;

use super::CliError;
use crate::output::format_node;
use crate::script::{get_all, set_all};
use crate::{Batch, Document};

/// Collect script lines from arguments, then from `file` if given.
///
/// Every line is trimmed; blank lines in the file are skipped.
pub fn load_scripts<S: AsRef<str>>(args: &[S], file: Option<&Path>) -> Result<Vec<String>, CliError> {
    let mut scripts: Vec<String> = args.iter().map(|arg| arg.as_ref().trim().to_string()).collect();

    if let Some(path) = file {
        let content = fs::read_to_string(path).map_err(|source| CliError::ScriptFile {
            path: path.to_path_buf(),
            source,
        })?;
        scripts.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    Ok(scripts)
}

/// Execute scripts against the TOML text `input`.
///
/// A get batch yields one formatted value per line. A set batch yields the
/// edited document as TOML.
pub fn run_scripts<S: AsRef<str>>(scripts: &[S], input: &str) -> Result<String, CliError> {
    let batch = Batch::classify(scripts)?;
    let mut doc = Document::parse(input)?;

    match batch {
        Batch::Get(paths) => {
            let lines = get_all(&doc, &paths)?
                .into_iter()
                .map(format_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(lines.join("\n"))
        }
        Batch::Set(assignments) => {
            set_all(&mut doc, &assignments)?;
            Ok(doc.render()?)
        }
    }
}
