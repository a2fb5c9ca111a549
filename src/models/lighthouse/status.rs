use serde::{Deserialize, Serialize};
use std::fmt;

// Category verdict derived from its percentage
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryStatus {
    Pass,
    NeedsWork,
    Poor,
}

impl CategoryStatus {
    pub const PASS_THRESHOLD: u32 = 90;
    pub const NEEDS_WORK_THRESHOLD: u32 = 50;

    pub fn from_percent(percent: u32) -> Self {
        if percent >= Self::PASS_THRESHOLD {
            CategoryStatus::Pass
        } else if percent >= Self::NEEDS_WORK_THRESHOLD {
            CategoryStatus::NeedsWork
        } else {
            CategoryStatus::Poor
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            CategoryStatus::Pass => "PASS",
            CategoryStatus::NeedsWork => "NEEDS WORK",
            CategoryStatus::Poor => "POOR",
        };
        write!(f, "{}", status_str)
    }
}
