pub mod lighthouse;

pub use lighthouse::{extract_report, read_report, Extractor, DEFAULT_MARKER};
