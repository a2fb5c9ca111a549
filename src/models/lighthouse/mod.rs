pub mod audit;
pub mod category;
pub mod report;
pub mod status;
pub mod views;

pub use audit::{Audit, AuditDetails, ScoreDisplayMode};
pub use category::{percent, Category};
pub use report::Report;
pub use status::CategoryStatus;
pub use views::{
    CategoryScore, FailedAudit, Opportunity, ProjectedViews, ProjectionLimits, VitalMetric,
};
