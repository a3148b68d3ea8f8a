//! Omni-Scanner - Progressive-disclosure metadata for context directories.
//!
//! Walks a directory of mixed-type files and produces one lightweight entry
//! per file, so an agent can decide what to load in full:
//! - `*.py` - public function signatures and docstrings (no bodies)
//! - `*.md`, `*.markdown`, `*.txt` - title and leading paragraph
//! - anything else - a bounded raw-text preview
//!
//! # Architecture
//!
//! ```text
//! omni-scanner/src/
//! ├── lib.rs              # Main module and exports
//! ├── config.rs           # ScanConfig (TOML-loadable)
//! ├── error.rs            # ScanError
//! ├── render.rs           # Banner + pretty JSON rendering
//! └── context/            # Context directory scanning
//!     ├── mod.rs
//!     ├── scanner.rs      # ContextScanner: walk + dispatch
//!     ├── types.rs        # FileEntry, FileKind, ScanReport
//!     ├── prose.rs        # Title / paragraph extraction
//!     └── summary.rs      # Generic text preview
//! ```
//!
//! # Example
//!
//! ```ignore
//! use omni_scanner::{ContextScanner, ScanConfig, render_report};
//!
//! let report = ContextScanner::new(ScanConfig::default()).scan_dir(Path::new("context_files"))?;
//! println!("{}", render_report(&report)?);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod context;
pub mod error;
pub mod render;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ScanConfig;
pub use context::{
    ContextScanner, EntryOutcome, FileEntry, FileKind, ProseSummary, ScanReport, extract_prose,
    scan_python_file, summarize_text,
};
pub use error::ScanError;
pub use render::{REPORT_BANNER, render_report, to_pretty_json};

// Structural scanner types that appear in reports
pub use omni_ast::{AnnotationValue, FunctionRecord, ParameterRecord, ScanOptions};

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
