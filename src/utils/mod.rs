pub mod file_utils;
pub mod log_utils;

pub use file_utils::read_report_file;
pub use log_utils::init_logging;
