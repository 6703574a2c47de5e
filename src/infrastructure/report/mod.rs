pub mod fonts;
pub mod renderer;
pub mod theme;

pub use renderer::{ReportError, ReportRenderer, report_file_name};
