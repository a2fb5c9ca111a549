use crate::error::ReportError;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Reads a report document. Bytes that are not valid UTF-8 are replaced
/// rather than rejected; only the embedded JSON has to decode cleanly.
pub fn read_report_file(path: &Path) -> Result<String, ReportError> {
    let bytes = fs::read(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    match String::from_utf8(bytes) {
        Ok(document) => Ok(document),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8 at byte {}, replacing invalid sequences",
                path.display(),
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
