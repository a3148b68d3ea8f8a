//! Report rendering.

use serde::Serialize;

use crate::context::ScanReport;

/// Line printed before the JSON report.
pub const REPORT_BANNER: &str = "--- CONTEXT FILES METADATA ---";

/// Pretty-print any serializable value as JSON (two-space indent).
///
/// Non-ASCII characters are written verbatim.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Render a report as the banner line followed by a pretty JSON array.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_report(report: &ScanReport) -> Result<String, serde_json::Error> {
    Ok(format!("{REPORT_BANNER}\n{}", to_pretty_json(report)?))
}
