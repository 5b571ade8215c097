//! CLI support for tq
//!
//! Provides programmatic access to the `tq` binary's behavior: an immutable
//! [`Config`] is built once from the command line and [`execute`] runs it
//! against the input document text.

mod convert;
mod script;

pub use convert::{json_to_toml, toml_to_json};
pub use script::{load_scripts, run_scripts};

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::{DocumentError, JsonError, QueryError};

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("failed to convert json to toml: {0}")]
    Convert(#[from] JsonError),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to open script file {}: {source}", .path.display())]
    ScriptFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("no input provided. Use --input or pipe a document to stdin.")]
    NoInput,
}

/// What a single invocation does with its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run get or set scripts against a TOML document
    Script(Vec<String>),
    /// Convert a TOML document to JSON
    TomlToJson,
    /// Convert a JSON object to a TOML document
    JsonToToml,
}

/// Invocation settings, fixed before any input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Run `config` against the document text `input`, returning what to print.
pub fn execute(config: &Config, input: &str) -> Result<String, CliError> {
    debug!(mode = ?config.mode, pretty = config.pretty, "executing");
    match &config.mode {
        Mode::Script(scripts) => run_scripts(scripts.as_slice(), input),
        Mode::TomlToJson => toml_to_json(input, config.pretty),
        Mode::JsonToToml => json_to_toml(input),
    }
}
