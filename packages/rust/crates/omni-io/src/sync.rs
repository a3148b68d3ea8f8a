//! Synchronous file I/O operations.

use std::fs as std_fs;
use std::io::Read;
use std::path::Path;

use crate::detect::{decode_lossy, decode_strict};
use crate::error::IoError;

/// Read text from a file with a size check and strict UTF-8 decoding.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Returns
/// Decoded text content or an error.
///
/// # Example
///
/// ```rust,ignore
/// use omni_io::read_text_safe;
///
/// let content = read_text_safe("README.md", 1024 * 1024)?;
/// ```
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path)
        .map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;

    decode_strict(buffer)
}

/// Read at most `limit` bytes from the start of a file and decode them lossily.
///
/// Never fails on content; only opening or reading the file can fail.
pub fn read_prefix_lossy<P: AsRef<Path>>(path: P, limit: usize) -> Result<String, IoError> {
    let path = path.as_ref();

    let file = std_fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
        _ => IoError::System(e),
    })?;

    let mut buffer = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buffer)?;
    log::trace!("read {} prefix bytes from {}", buffer.len(), path.display());

    Ok(decode_lossy(&buffer))
}
