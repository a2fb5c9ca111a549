use crate::models::{
    CategoryScore, CategoryStatus, FailedAudit, Opportunity, ProjectedViews, ProjectionLimits,
    Report, VitalMetric,
};
use log::debug;

// Audit id and display label, in print order
pub const VITAL_METRICS: [(&str, &str); 5] = [
    ("first-contentful-paint", "FCP"),
    ("largest-contentful-paint", "LCP"),
    ("total-blocking-time", "TBT"),
    ("cumulative-layout-shift", "CLS"),
    ("speed-index", "Speed Index"),
];

pub const FAILING_SCORE: f64 = 0.9;

pub fn project(report: &Report) -> ProjectedViews {
    project_with(report, &ProjectionLimits::default())
}

pub fn project_with(report: &Report, limits: &ProjectionLimits) -> ProjectedViews {
    let views = ProjectedViews {
        categories: category_scores(report),
        vitals: vital_metrics(report),
        opportunities: ranked_opportunities(report, limits.max_opportunities),
        failed_audits: ranked_failed_audits(report, limits.max_failed_audits),
    };
    debug!(
        "Projected {} categories, {} vitals, {} opportunities, {} failed audits",
        views.categories.len(),
        views.vitals.len(),
        views.opportunities.len(),
        views.failed_audits.len()
    );
    views
}

pub fn category_scores(report: &Report) -> Vec<CategoryScore> {
    report
        .categories
        .values()
        .map(|category| {
            let percent = category.percent();
            CategoryScore {
                title: category.title.clone(),
                percent,
                status: CategoryStatus::from_percent(percent),
            }
        })
        .collect()
}

pub fn vital_metrics(report: &Report) -> Vec<VitalMetric> {
    VITAL_METRICS
        .iter()
        .filter_map(|(audit_id, label)| {
            let audit = report.audits.get(*audit_id)?;
            Some(VitalMetric {
                label: label.to_string(),
                value: audit
                    .display_value
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
            })
        })
        .collect()
}

/// Opportunities with positive savings, biggest first. Ties keep report order.
pub fn ranked_opportunities(report: &Report, limit: usize) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> = report
        .audits
        .values()
        .filter_map(|audit| {
            audit.opportunity_savings_ms().map(|savings_ms| Opportunity {
                title: audit.title.clone(),
                savings_ms,
            })
        })
        .collect();

    opportunities.sort_by(|a, b| b.savings_ms.total_cmp(&a.savings_ms));
    opportunities.truncate(limit);
    opportunities
}

/// Scored audits below the passing line, worst first. Ties keep report order.
/// Audits without a score are skipped rather than treated as 0.
pub fn ranked_failed_audits(report: &Report, limit: usize) -> Vec<FailedAudit> {
    let mut failed: Vec<FailedAudit> = report
        .audits
        .values()
        .filter(|audit| audit.score_display_mode.is_scored())
        .filter_map(|audit| match audit.score {
            Some(score) if score < FAILING_SCORE => Some(FailedAudit {
                title: audit.title.clone(),
                score,
            }),
            _ => None,
        })
        .collect();

    failed.sort_by(|a, b| a.score.total_cmp(&b.score));
    failed.truncate(limit);
    failed
}
