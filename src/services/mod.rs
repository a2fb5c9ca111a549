pub mod site_audit_service;

pub use site_audit_service::{
    extract_report, project, project_with, read_report, render, Extractor, DEFAULT_MARKER,
};
