// src/models/mod.rs

pub mod lighthouse;

pub use lighthouse::{
    percent, Audit, AuditDetails, Category, CategoryScore, CategoryStatus, FailedAudit,
    Opportunity, ProjectedViews, ProjectionLimits, Report, ScoreDisplayMode, VitalMetric,
};
