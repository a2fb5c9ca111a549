use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not find Lighthouse JSON in the file")]
    NotFound,
    #[error("Lighthouse JSON is malformed: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not read report {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl ReportError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::Read { .. } => 1,
            ReportError::Extraction(ExtractionError::NotFound) => 3,
            ReportError::Extraction(ExtractionError::MalformedPayload(_)) => 4,
        }
    }
}
