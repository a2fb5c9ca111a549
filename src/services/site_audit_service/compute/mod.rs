pub mod projection;

pub use projection::{project, project_with};
