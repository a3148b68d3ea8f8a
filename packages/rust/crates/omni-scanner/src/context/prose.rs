//! Prose extractor for `.md`, `.markdown` and `.txt` files.

use std::path::Path;

use omni_io::{IoError, read_text_safe};

/// Marker that starts a heading line.
pub const HEADING_MARKER: char = '#';

/// Description used when a document has no paragraph.
pub const NO_PARAGRAPH: &str = "No description available.";

/// Title and leading paragraph of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProseSummary {
    /// First heading, first non-blank line, or the file name.
    pub title: String,
    /// First paragraph, or [`NO_PARAGRAPH`].
    pub description: String,
}

/// Extract a title and leading paragraph from document text.
///
/// Heading lines are not part of the description; a heading that follows
/// paragraph text ends the paragraph.
#[must_use]
pub fn extract_prose(text: &str, fallback_title: &str) -> ProseSummary {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let title = lines
        .iter()
        .filter(|line| line.starts_with(HEADING_MARKER))
        .map(|line| line.trim_start_matches(HEADING_MARKER).trim())
        .find(|heading| !heading.is_empty())
        .or_else(|| lines.iter().map(|line| line.trim()).find(|line| !line.is_empty()))
        .unwrap_or(fallback_title)
        .to_string();

    let mut paragraph: Vec<&str> = Vec::new();
    for line in &lines {
        if line.trim().is_empty() || line.starts_with(HEADING_MARKER) {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        paragraph.push(line);
    }

    let description = if paragraph.is_empty() {
        NO_PARAGRAPH.to_string()
    } else {
        paragraph.join("\n").trim().to_string()
    };

    ProseSummary { title, description }
}

/// Read a prose file and extract its summary.
///
/// # Errors
///
/// Returns an [`IoError`] if the file is missing, too large, or not UTF-8.
pub fn scan_prose_file(path: &Path, max_bytes: u64) -> Result<ProseSummary, IoError> {
    let text = read_text_safe(path, max_bytes)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(extract_prose(&text, &file_name))
}
