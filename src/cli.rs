use clap::Parser;
use lightdigest::{ProjectionLimits, DEFAULT_MARKER};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lightdigest",
    version,
    about = "Summarize the scores, vitals and top issues of a Lighthouse HTML report"
)]
pub struct Cli {
    /// Lighthouse HTML report to summarize
    #[arg(value_name = "REPORT_PATH", env = "LIGHTHOUSE_REPORT")]
    pub report_path: PathBuf,

    /// Number of opportunities to list
    #[arg(
        long,
        env = "LIGHTHOUSE_MAX_OPPORTUNITIES",
        default_value_t = ProjectionLimits::default().max_opportunities
    )]
    pub max_opportunities: usize,

    /// Number of failed audits to list
    #[arg(
        long = "max-failed",
        env = "LIGHTHOUSE_MAX_FAILED",
        default_value_t = ProjectionLimits::default().max_failed_audits
    )]
    pub max_failed_audits: usize,

    /// Global the report assigns its JSON to
    #[arg(long, env = "LIGHTHOUSE_MARKER", default_value = DEFAULT_MARKER)]
    pub marker: String,
}

impl Cli {
    pub fn limits(&self) -> ProjectionLimits {
        ProjectionLimits {
            max_opportunities: self.max_opportunities,
            max_failed_audits: self.max_failed_audits,
        }
    }
}
