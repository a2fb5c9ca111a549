use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use lightdigest::{project_with, read_report, render, Extractor, ReportError};
use log::warn;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    dotenv().ok();
    lightdigest::utils::init_logging();

    let cli = cli::Cli::parse();
    match run(&cli) {
        Ok(summary) => {
            print!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!("Failed to summarize {}: {:?}", cli.report_path.display(), e);
            eprintln!("{}", e);
            let code = e
                .downcast_ref::<ReportError>()
                .map(ReportError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &cli::Cli) -> Result<String> {
    let extractor = Extractor::with_marker(&cli.marker);
    let report = read_report(&cli.report_path, &extractor)?;
    let views = project_with(&report, &cli.limits());
    Ok(render(report.final_url.as_deref(), &views))
}
