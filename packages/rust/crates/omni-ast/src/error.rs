//! Error types for Python parsing.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Failure to turn Python source into a [`Module`](crate::Module).
///
/// Parsing is all-or-nothing: no partial module is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source is not valid Python syntax.
    #[error("{message} (line {line}, column {column})")]
    Syntax {
        /// Short diagnostic, e.g. `invalid syntax` or `expected ':'`.
        message: String,
        /// 1-based line of the offending token.
        line: usize,
        /// 1-based byte column of the offending token.
        column: usize,
    },

    /// The Python grammar could not be loaded into the parser.
    #[error("Failed to load Python grammar: {0}")]
    Language(String),

    /// The parser gave up without producing a tree.
    #[error("Parser aborted before producing a syntax tree")]
    Aborted,
}

impl ParseError {
    /// Line of a syntax error, if this is one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}
