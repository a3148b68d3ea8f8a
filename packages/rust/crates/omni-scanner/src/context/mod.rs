//! Context Scanner Module
//!
//! Indexes a directory of mixed-type files for progressive disclosure.

pub mod prose;
pub mod scanner;
pub mod summary;
pub mod types;

// Re-export common types from submodules
pub use prose::{ProseSummary, extract_prose, scan_prose_file};
pub use scanner::{ContextScanner, scan_python_file};
pub use summary::{scan_generic_file, summarize_text};
pub use types::{EntryOutcome, FileEntry, FileKind, ScanReport};
