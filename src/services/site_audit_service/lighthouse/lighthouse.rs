use crate::error::{ExtractionError, ReportError};
use crate::models::Report;
use crate::utils::read_report_file;
use log::{debug, info};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_MARKER: &str = "__LIGHTHOUSE_JSON__";

/// Locates the `window.<marker> = {...};` assignment a Lighthouse HTML
/// report embeds and decodes its object literal.
///
/// The capture is non-greedy and stops at the first `};`, so a payload with
/// that sequence inside a string value is cut short and fails to decode.
#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: Regex,
}

impl Extractor {
    pub fn with_marker(marker: &str) -> Self {
        let pattern = format!(r"(?s)window\.{}\s*=\s*(\{{.*?\}});", regex::escape(marker));
        Self {
            pattern: Regex::new(&pattern).expect("escaped marker yields a valid regex"),
        }
    }

    pub fn extract(&self, document: &str) -> Result<Report, ExtractionError> {
        let payload = self
            .pattern
            .captures(document)
            .and_then(|captures| captures.get(1))
            .ok_or(ExtractionError::NotFound)?;
        debug!(
            "Found embedded report at byte {} ({} bytes)",
            payload.start(),
            payload.as_str().len()
        );

        let report: Report = serde_json::from_str(payload.as_str())?;
        info!(
            "Decoded report: lighthouse {}, fetched {}, {} categories, {} audits",
            report.lighthouse_version.as_deref().unwrap_or("unknown"),
            report.fetch_time.as_deref().unwrap_or("unknown"),
            report.categories.len(),
            report.audits.len()
        );
        Ok(report)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_marker(DEFAULT_MARKER)
    }
}

fn default_extractor() -> &'static Extractor {
    static EXTRACTOR: OnceLock<Extractor> = OnceLock::new();
    EXTRACTOR.get_or_init(Extractor::default)
}

/// Extracts the report embedded under the standard Lighthouse marker.
pub fn extract_report(document: &str) -> Result<Report, ExtractionError> {
    default_extractor().extract(document)
}

pub fn read_report(path: &Path, extractor: &Extractor) -> Result<Report, ReportError> {
    let document = read_report_file(path)?;
    Ok(extractor.extract(&document)?)
}
