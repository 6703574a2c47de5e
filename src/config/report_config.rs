//! Report output configuration parsing from environment variables.

use std::env;
use std::path::PathBuf;

/// Report environment configuration
#[derive(Debug, Clone)]
pub struct ReportEnvConfig {
    /// Directory the generated PNG is written into.
    pub output_dir: PathBuf,
    /// Explicit regular-weight TrueType font, overriding discovery.
    pub font_path: Option<PathBuf>,
    /// Explicit bold-weight TrueType font, overriding discovery.
    pub bold_font_path: Option<PathBuf>,
}

impl Default for ReportEnvConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            font_path: None,
            bold_font_path: None,
        }
    }
}

impl ReportEnvConfig {
    pub fn from_env() -> Self {
        Self {
            output_dir: env::var("REPORT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            font_path: env::var("REPORT_FONT_PATH").ok().map(PathBuf::from),
            bold_font_path: env::var("REPORT_BOLD_FONT_PATH").ok().map(PathBuf::from),
        }
    }
}
