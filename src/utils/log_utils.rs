use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

// Diagnostics go to stderr so stdout only carries the report.
// `log` records from the services are bridged by the subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
