// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod lighthouse;
pub mod render;

pub use compute::{project, project_with};
pub use lighthouse::{extract_report, read_report, Extractor, DEFAULT_MARKER};
pub use render::render;
