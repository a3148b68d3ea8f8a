//! Error types for context scanning.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use omni_ast::ParseError;
use omni_io::IoError;
use thiserror::Error;

/// Error types for context scanning.
///
/// Only [`ScanError::NotFound`] and [`ScanError::Config`] are fatal for a
/// directory scan; read and parse failures are recorded on the entry of
/// the file that caused them.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root directory or target file does not exist.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A file could not be opened or decoded.
    #[error(transparent)]
    Read(#[from] IoError),

    /// A source file is not valid Python.
    #[error("Syntax error: {0}")]
    Parse(#[from] ParseError),

    /// The scan configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
