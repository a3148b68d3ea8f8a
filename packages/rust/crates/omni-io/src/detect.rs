//! Text decoding utilities.
//!
//! Strict decoding for files whose content must be parsed, lossy decoding
//! for previews.

use crate::error::IoError;

/// Decode bytes as UTF-8, failing on the first invalid sequence.
///
/// A leading byte-order mark is dropped.
///
/// # Errors
/// Returns `IoError::Encoding` with the offset of the first invalid byte.
pub fn decode_strict(buffer: Vec<u8>) -> Result<String, IoError> {
    match String::from_utf8(buffer) {
        Ok(s) => Ok(strip_bom(s)),
        Err(e) => Err(IoError::Encoding(e.utf8_error().valid_up_to())),
    }
}

/// Decode bytes to String with lossy fallback.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD. A sequence cut off at
/// the end of the buffer is replaced the same way. A byte-order mark is
/// kept as U+FEFF.
#[must_use]
pub fn decode_lossy(buffer: &[u8]) -> String {
    String::from_utf8_lossy(buffer).into_owned()
}

fn strip_bom(s: String) -> String {
    match s.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => s,
    }
}
