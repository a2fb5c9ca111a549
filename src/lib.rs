//! Condensed summaries of Lighthouse HTML reports.
//!
//! A Lighthouse HTML report embeds its JSON result as
//! `window.__LIGHTHOUSE_JSON__ = {...};`. This crate pulls that payload out,
//! ranks what matters (category scores, core web vitals, the biggest
//! opportunities, the worst failing audits) and renders it as plain text.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{ExtractionError, ReportError};
pub use models::{ProjectedViews, ProjectionLimits, Report};
pub use services::{
    extract_report, project, project_with, read_report, render, Extractor, DEFAULT_MARKER,
};
