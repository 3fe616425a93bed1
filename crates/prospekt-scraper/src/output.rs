//! JSON sink for extracted brochures.

use std::path::Path;

use prospekt_core::BrochureRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ScraperError;

const INDENT: &[u8] = b"    ";

/// Renders `records` as a pretty-printed JSON array with a four-space
/// indent. Non-ASCII text is emitted as-is.
///
/// # Errors
///
/// Returns [`ScraperError::Serialize`] if serialization fails.
pub fn to_json_string(records: &[BrochureRecord]) -> Result<String, ScraperError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    // serde_json only writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes `records` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ScraperError::Serialize`] if serialization fails or
/// [`ScraperError::Io`] if the file cannot be written.
pub fn write_json(path: &Path, records: &[BrochureRecord]) -> Result<(), ScraperError> {
    let json = to_json_string(records)?;
    std::fs::write(path, json).map_err(|source| ScraperError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = records.len(), "wrote brochures");
    Ok(())
}
