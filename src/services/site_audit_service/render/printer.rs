use crate::models::{percent, ProjectedViews};
use std::fmt::Write;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

pub fn render(url: Option<&str>, views: &ProjectedViews) -> String {
    let mut out = String::new();
    write_report(&mut out, url, views).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, url: Option<&str>, views: &ProjectedViews) -> std::fmt::Result {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(out, "LIGHTHOUSE REPORT")?;
    writeln!(out, "{}", banner)?;
    writeln!(out, "URL: {}", url.unwrap_or("N/A"))?;

    section(out, "SCORES:")?;
    for category in &views.categories {
        writeln!(
            out,
            "  {}: {} [{}]",
            category.title, category.percent, category.status
        )?;
    }

    section(out, "CORE WEB VITALS:")?;
    for metric in &views.vitals {
        writeln!(out, "  {}: {}", metric.label, metric.value)?;
    }

    section(out, "OPPORTUNITIES (by potential savings):")?;
    for opportunity in &views.opportunities {
        writeln!(
            out,
            "  - {}: ~{:.1}s",
            opportunity.title,
            opportunity.savings_ms / 1000.0
        )?;
    }

    section(out, "FAILED AUDITS:")?;
    for audit in &views.failed_audits {
        writeln!(
            out,
            "  - {} (score: {})",
            audit.title,
            percent(Some(audit.score))
        )?;
    }

    Ok(())
}

fn section(out: &mut String, header: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}
