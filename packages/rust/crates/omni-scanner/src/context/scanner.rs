//! Context Scanner - walks a context directory and indexes every file.
//!
//! Each file is dispatched by name suffix:
//! - `.py` - disclosed functions via `omni-ast`
//! - `.md`, `.markdown`, `.txt` - title and leading paragraph
//! - anything else - bounded raw-text summary
//!
//! # Example
//!
//! ```ignore
//! use omni_scanner::{ContextScanner, ScanConfig};
//!
//! let scanner = ContextScanner::new(ScanConfig::default());
//! let report = scanner.scan_dir(Path::new("context_files"))?;
//!
//! for entry in report.entries() {
//!     println!("{} ({})", entry.file, entry.kind.as_str());
//! }
//! ```

use std::path::{Path, PathBuf};

use omni_ast::{FunctionRecord, scan_source_with};
use omni_io::read_text_safe;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::context::prose::scan_prose_file;
use crate::context::summary::scan_generic_file;
use crate::context::types::{EntryOutcome, FileEntry, FileKind, ScanReport};
use crate::error::ScanError;

/// Context Scanner - builds a [`ScanReport`] for a directory tree.
///
/// Per-file failures are recorded on that file's entry; only a missing
/// root aborts a scan.
#[derive(Debug, Clone, Default)]
pub struct ContextScanner {
    config: ScanConfig,
}

impl ContextScanner {
    /// Create a scanner with the given configuration.
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan every file below `root`.
    ///
    /// Within a directory, files come first in byte-lexicographic name
    /// order, then subdirectories in the same order, depth-first.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] if `root` is not an existing directory.
    pub fn scan_dir(&self, root: &Path) -> Result<ScanReport, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::NotFound(root.to_path_buf()));
        }

        let files = discover_files(root);

        let entries: Vec<FileEntry> = if self.config.parallel {
            files
                .par_iter()
                .map(|path| self.scan_entry(root, path))
                .collect()
        } else {
            files
                .iter()
                .map(|path| self.scan_entry(root, path))
                .collect()
        };

        let report = ScanReport::new(entries);
        log::info!(
            "Scanned {} context files from {:?} ({} failed)",
            report.len(),
            root,
            report.failures().count()
        );
        Ok(report)
    }

    /// Scan a single file and describe it relative to its parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] if `path` is not an existing file.
    pub fn scan_file(&self, path: &Path) -> Result<FileEntry, ScanError> {
        if !path.is_file() {
            return Err(ScanError::NotFound(path.to_path_buf()));
        }
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(self.scan_entry(base, path))
    }

    /// Build the entry for one file. Never fails; errors land in the entry.
    #[must_use]
    pub fn scan_entry(&self, root: &Path, path: &Path) -> FileEntry {
        let file = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = FileKind::classify(&file_name);
        log::debug!("Scanning {} as {}", file, kind.as_str());

        let outcome = match kind {
            FileKind::Python => self
                .scan_python_file(path)
                .map(|functions| EntryOutcome::Python { functions }),
            FileKind::Markdown => scan_prose_file(path, self.config.max_file_bytes)
                .map(|s| EntryOutcome::Markdown {
                    title: s.title,
                    description: s.description,
                })
                .map_err(ScanError::from),
            FileKind::Generic => scan_generic_file(
                path,
                self.config.summary_read_bytes,
                self.config.summary_chars,
            )
            .map(|summary| EntryOutcome::Generic { summary })
            .map_err(ScanError::from),
        }
        .unwrap_or_else(|e| {
            log::warn!("Failed to scan {}: {}", file, e);
            EntryOutcome::Failed {
                error: e.to_string(),
            }
        });

        FileEntry {
            file,
            kind,
            outcome,
        }
    }

    /// Disclose the public functions of one Python file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] for a missing file,
    /// [`ScanError::Read`] if it cannot be read as UTF-8 within the size
    /// limit, and [`ScanError::Parse`] if it is not valid Python.
    pub fn scan_python_file(&self, path: &Path) -> Result<Vec<FunctionRecord>, ScanError> {
        if !path.exists() {
            return Err(ScanError::NotFound(path.to_path_buf()));
        }
        let source = read_text_safe(path, self.config.max_file_bytes)?;
        Ok(scan_source_with(&source, self.config.scan_options())?)
    }
}

/// Disclose the public functions of one Python file with default settings.
///
/// # Errors
///
/// See [`ContextScanner::scan_python_file`].
pub fn scan_python_file(path: &Path) -> Result<Vec<FunctionRecord>, ScanError> {
    ContextScanner::default().scan_python_file(path)
}

/// Collect every file below `root` in report order.
///
/// Symlinked files are included; symlinked directories are not followed.
fn discover_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable path: {}", e);
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
