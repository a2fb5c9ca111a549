use serde::{Deserialize, Serialize};

// Top-level scored grouping, e.g. Performance or SEO
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl Category {
    pub fn percent(&self) -> u32 {
        percent(self.score)
    }
}

/// Converts a Lighthouse score in `[0, 1]` into a whole percentage.
///
/// A missing score counts as 0 for display purposes.
pub fn percent(score: Option<f64>) -> u32 {
    match score {
        Some(score) if score > 0.0 => (score * 100.0).round().clamp(0.0, 100.0) as u32,
        _ => 0,
    }
}
