use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The frontend could not produce a syntax tree for a source file.
///
/// Find-style queries treat this as "no results" (with a diagnostic);
/// `index_file` reports it through its boolean result.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("no usable syntax tree for {}", .path.display())]
    NoTree { path: PathBuf },

    #[error("malformed syntax tree dump for {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The caller-supplied search pattern does not compile.
///
/// Unlike [`ParseError`] this is a hard error for the whole query: callers
/// must be able to tell "your pattern is invalid" from "nothing matched".
#[derive(Debug, Error)]
#[error("invalid search pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}
