//! Extraction of the file body from an ONTAP byte-range read response.
//!
//! With `Accept: multipart/form-data` the appliance wraps the requested bytes
//! in a multipart envelope:
//!
//! ```text
//! --boundary
//! Content-Disposition: form-data; name="file"
//! Content-Type: application/octet-stream
//!
//! <file bytes>
//! --boundary--
//! ```
//!
//! The body is everything after the octet-stream header line and before the
//! closing boundary. Blank lines are dropped before positions are computed, so
//! blank lines inside the file body are lost as well.

use crate::error::ExtractionError;

pub const CONTENT_MARKER: &str = "Content-Type: application/octet-stream";

pub fn extract_file_content(raw: &[u8]) -> Result<String, ExtractionError> {
    let decoded =
        std::str::from_utf8(raw).map_err(|error| ExtractionError::InvalidUtf8(error.to_string()))?;
    let normalized = decoded.replace('\r', "");

    let lines: Vec<&str> = normalized
        .split('\n')
        .filter(|line| !line.is_empty())
        .collect();

    let marker_index = lines
        .iter()
        .position(|line| *line == CONTENT_MARKER)
        .ok_or(ExtractionError::MarkerNotFound {
            marker: CONTENT_MARKER,
        })?;

    let start = marker_index + 1;
    // The last line is the closing boundary.
    let end = lines.len() - 1;
    if start >= end {
        return Ok(String::new());
    }

    Ok(lines[start..end].join("\n"))
}
