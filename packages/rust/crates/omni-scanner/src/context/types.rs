//! Report types: one [`FileEntry`] per file, collected in a [`ScanReport`].

use omni_ast::FunctionRecord;
use serde::Serialize;

/// Suffix of Python source files.
pub const SOURCE_SUFFIX: &str = ".py";

/// Suffixes of prose files.
pub const PROSE_SUFFIXES: [&str; 3] = [".md", ".markdown", ".txt"];

/// Handler selected for a file, by case-sensitive name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `.py`
    Python,
    /// `.md`, `.markdown`, `.txt`
    Markdown,
    /// Everything else.
    Generic,
}

impl FileKind {
    /// Classify a file by its name.
    #[must_use]
    pub fn classify(file_name: &str) -> Self {
        if file_name.ends_with(SOURCE_SUFFIX) {
            Self::Python
        } else if PROSE_SUFFIXES.iter().any(|s| file_name.ends_with(s)) {
            Self::Markdown
        } else {
            Self::Generic
        }
    }

    /// Name used in the `type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Markdown => "markdown",
            Self::Generic => "generic",
        }
    }
}

/// Type-specific part of a [`FileEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryOutcome {
    /// Disclosed functions of a source file.
    Python {
        /// Public functions in source order.
        functions: Vec<FunctionRecord>,
    },
    /// Title and leading paragraph of a prose file.
    Markdown {
        /// Document title.
        title: String,
        /// First paragraph.
        description: String,
    },
    /// Raw-text preview of any other file.
    Generic {
        /// Leading characters of the file.
        summary: String,
    },
    /// The handler failed for this file.
    Failed {
        /// Error message.
        error: String,
    },
}

/// Metadata for one discovered file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    /// Path relative to the scanned root.
    pub file: String,
    /// Handler that processed the file.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Handler output or error.
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

impl FileEntry {
    /// Error message, if the handler failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            EntryOutcome::Failed { error } => Some(error.as_str()),
            _ => None,
        }
    }

    /// Disclosed functions, if this is a successfully scanned source file.
    #[must_use]
    pub fn functions(&self) -> Option<&[FunctionRecord]> {
        match &self.outcome {
            EntryOutcome::Python { functions } => Some(functions.as_slice()),
            _ => None,
        }
    }
}

/// Ordered result of a directory scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    entries: Vec<FileEntry>,
}

impl ScanReport {
    /// Wrap entries that are already in visitation order.
    #[must_use]
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self { entries }
    }

    /// Entries in visitation order.
    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scanned directory held no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its relative path.
    #[must_use]
    pub fn get(&self, file: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.file == file)
    }

    /// Entries whose handler failed.
    pub fn failures(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| e.error().is_some())
    }
}

impl IntoIterator for ScanReport {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
