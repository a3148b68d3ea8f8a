#![allow(clippy::doc_markdown)]

//! omni-io - Bounded file reads for context scanning
//!
//! # Features
//!
//! - **Strict reads**: size-limited, UTF-8 validated text for parsers
//! - **Prefix reads**: first N bytes, lossily decoded, for previews
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Strict and lossy decoding
//! └── sync.rs     # Synchronous API
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_io::{read_prefix_lossy, read_text_safe};
//!
//! let source = read_text_safe("tool.py", 1024 * 1024)?;
//! let preview = read_prefix_lossy("blob.bin", 2048)?;
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod detect;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::IoError;
pub use sync::{read_prefix_lossy, read_text_safe};

pub use detect::{decode_lossy, decode_strict};
