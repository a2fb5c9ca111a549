use serde::{Deserialize, Serialize};

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub score_display_mode: ScoreDisplayMode,
    #[serde(default)]
    pub display_value: Option<String>,
    #[serde(default)]
    pub details: Option<AuditDetails>,
}

impl Audit {
    /// Savings in milliseconds when this audit is a positive-savings opportunity.
    pub fn opportunity_savings_ms(&self) -> Option<f64> {
        let details = self.details.as_ref()?;
        if details.kind.as_deref() != Some(AuditDetails::OPPORTUNITY) {
            return None;
        }
        details.overall_savings_ms.filter(|savings| *savings > 0.0)
    }
}

// Only the fields needed for ranking; the rest of `details` is skipped
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetails {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub overall_savings_ms: Option<f64>,
}

impl AuditDetails {
    pub const OPPORTUNITY: &'static str = "opportunity";
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    #[default]
    Numeric,
    Binary,
    Manual,
    NotApplicable,
    Informative,
    Error,
    MetricSavings,
    #[serde(other)]
    Unknown,
}

impl ScoreDisplayMode {
    /// Manual, not-applicable and informative audits never count as failures.
    pub fn is_scored(self) -> bool {
        !matches!(
            self,
            ScoreDisplayMode::Manual | ScoreDisplayMode::NotApplicable | ScoreDisplayMode::Informative
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_audit_uses_defaults() {
        let audit: Audit = serde_json::from_str(r#"{"title": "Document has a title"}"#).unwrap();

        assert_eq!(audit.score, None);
        assert_eq!(audit.score_display_mode, ScoreDisplayMode::Numeric);
        assert_eq!(audit.display_value, None);
        assert_eq!(audit.details, None);
    }

    #[test]
    fn test_untitled_audit_still_decodes() {
        let audit: Audit = serde_json::from_str(r#"{"displayValue": "2 s"}"#).unwrap();

        assert_eq!(audit.title, "");
        assert_eq!(audit.display_value.as_deref(), Some("2 s"));
    }

    #[test]
    fn test_display_modes_decode_from_camel_case() {
        let modes: Vec<ScoreDisplayMode> = serde_json::from_str(
            r#"["numeric", "binary", "manual", "notApplicable", "informative", "error", "metricSavings", "somethingNew"]"#,
        )
        .unwrap();

        assert_eq!(
            modes,
            vec![
                ScoreDisplayMode::Numeric,
                ScoreDisplayMode::Binary,
                ScoreDisplayMode::Manual,
                ScoreDisplayMode::NotApplicable,
                ScoreDisplayMode::Informative,
                ScoreDisplayMode::Error,
                ScoreDisplayMode::MetricSavings,
                ScoreDisplayMode::Unknown,
            ]
        );
    }

    #[test]
    fn test_is_scored_excludes_non_scoring_modes() {
        assert!(ScoreDisplayMode::Numeric.is_scored());
        assert!(ScoreDisplayMode::Binary.is_scored());
        assert!(ScoreDisplayMode::MetricSavings.is_scored());
        assert!(!ScoreDisplayMode::Manual.is_scored());
        assert!(!ScoreDisplayMode::NotApplicable.is_scored());
        assert!(!ScoreDisplayMode::Informative.is_scored());
    }

    #[test]
    fn test_details_ignore_extra_fields() {
        let audit: Audit = serde_json::from_str(
            r#"{
                "title": "Eliminate render-blocking resources",
                "score": 0.4,
                "details": {
                    "type": "opportunity",
                    "headings": [],
                    "items": [{"url": "https://example.org/app.css", "wastedMs": 820}],
                    "overallSavingsMs": 820
                }
            }"#,
        )
        .unwrap();

        assert_eq!(audit.opportunity_savings_ms(), Some(820.0));
    }

    #[test]
    fn test_opportunity_savings_require_positive_opportunity() {
        let zero: Audit = serde_json::from_str(
            r#"{"title": "a", "details": {"type": "opportunity", "overallSavingsMs": 0}}"#,
        )
        .unwrap();
        let table: Audit = serde_json::from_str(
            r#"{"title": "b", "details": {"type": "table", "overallSavingsMs": 300}}"#,
        )
        .unwrap();
        let missing: Audit =
            serde_json::from_str(r#"{"title": "c", "details": {"type": "opportunity"}}"#).unwrap();

        assert_eq!(zero.opportunity_savings_ms(), None);
        assert_eq!(table.opportunity_savings_ms(), None);
        assert_eq!(missing.opportunity_savings_ms(), None);
    }
}
