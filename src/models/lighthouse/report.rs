use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Category;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// Decoded `window.__LIGHTHOUSE_JSON__` payload. Maps keep source order.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Report {
    #[serde(rename = "finalDisplayedUrl", default)]
    pub final_url: Option<String>,
    #[serde(rename = "lighthouseVersion", default)]
    pub lighthouse_version: Option<String>,
    #[serde(rename = "fetchTime", default)]
    pub fetch_time: Option<String>,
    #[serde(default)]
    pub categories: IndexMap<String, Category>,
    #[serde(default)]
    pub audits: IndexMap<String, Audit>,
}
