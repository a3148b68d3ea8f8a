//! Scan configuration.
//!
//! All fields have defaults, so an empty TOML document is a valid config:
//!
//! ```toml
//! include_async = false
//! top_level_only = false
//! parallel = false
//! max_file_bytes = 8388608
//! summary_read_bytes = 2048
//! summary_chars = 1024
//! ```

use std::fs;
use std::path::Path;

use omni_ast::ScanOptions;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Default cap for source and prose files (8 MiB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 8 * 1024 * 1024;

/// Default number of bytes read for a generic summary.
pub const DEFAULT_SUMMARY_READ_BYTES: usize = 2048;

/// Default number of characters kept in a generic summary.
pub const DEFAULT_SUMMARY_CHARS: usize = 1024;

/// Configuration for [`ContextScanner`](crate::ContextScanner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Also disclose `async def` functions.
    pub include_async: bool,
    /// Only disclose functions defined directly in the module scope.
    pub top_level_only: bool,
    /// Scan files on the rayon thread pool. Report order is unaffected.
    pub parallel: bool,
    /// Size limit for source and prose files.
    pub max_file_bytes: u64,
    /// Bytes read from the start of a generic file.
    pub summary_read_bytes: usize,
    /// Characters kept in a generic summary.
    pub summary_chars: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_async: false,
            top_level_only: false,
            parallel: false,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            summary_read_bytes: DEFAULT_SUMMARY_READ_BYTES,
            summary_chars: DEFAULT_SUMMARY_CHARS,
        }
    }
}

impl ScanConfig {
    /// Creates a new `ScanConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ScanError> {
        toml::from_str(content).map_err(|e| ScanError::Config(e.to_string()))
    }

    /// Load a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] if the file is missing, or
    /// [`ScanError::Config`] if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        if !path.is_file() {
            return Err(ScanError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| ScanError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded scan config from {:?}", path);
        Ok(config)
    }

    /// Sets whether `async def` functions are disclosed.
    #[must_use]
    pub fn with_include_async(mut self, include_async: bool) -> Self {
        self.include_async = include_async;
        self
    }

    /// Sets whether only module-level functions are disclosed.
    #[must_use]
    pub fn with_top_level_only(mut self, top_level_only: bool) -> Self {
        self.top_level_only = top_level_only;
        self
    }

    /// Sets whether files are scanned in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Traversal options for the structural scanner.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            include_async: self.include_async,
            top_level_only: self.top_level_only,
        }
    }
}
