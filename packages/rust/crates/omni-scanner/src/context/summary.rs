//! Generic summarizer: a bounded raw-text preview of any file.

use std::path::Path;

use omni_io::{IoError, read_prefix_lossy};

/// Keep the first `max_chars` characters of `text`.
#[must_use]
pub fn summarize_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// Read up to `read_bytes` bytes of a file and keep `max_chars` characters.
///
/// Invalid UTF-8 is replaced, never rejected.
///
/// # Errors
///
/// Returns an [`IoError`] only if the file cannot be opened or read.
pub fn scan_generic_file(path: &Path, read_bytes: usize, max_chars: usize) -> Result<String, IoError> {
    let text = read_prefix_lossy(path, read_bytes)?;
    Ok(summarize_text(&text, max_chars))
}
