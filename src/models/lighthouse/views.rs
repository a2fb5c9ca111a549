use crate::models::lighthouse::status::CategoryStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryScore {
    pub title: String,
    pub percent: u32,
    pub status: CategoryStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VitalMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Opportunity {
    pub title: String,
    pub savings_ms: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FailedAudit {
    pub title: String,
    pub score: f64,
}

// The four ranked views rendered by the printer
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectedViews {
    pub categories: Vec<CategoryScore>,
    pub vitals: Vec<VitalMetric>,
    pub opportunities: Vec<Opportunity>,
    pub failed_audits: Vec<FailedAudit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionLimits {
    pub max_opportunities: usize,
    pub max_failed_audits: usize,
}

impl Default for ProjectionLimits {
    fn default() -> Self {
        Self {
            max_opportunities: 10,
            max_failed_audits: 15,
        }
    }
}
