use crate::config::ReportEnvConfig;
use crate::domain::contact::ContactInfo;
use crate::domain::errors::ValidationError;
use crate::domain::metrics::BaselineMetrics;
use crate::domain::projection::ImpactProjection;
use crate::domain::scenario::Scenario;
use crate::infrastructure::report::{ReportError, ReportRenderer};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReportGenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] ReportError),
}

/// Turns a validated export request into a PNG on disk.
pub struct ReportService {
    config: ReportEnvConfig,
}

impl ReportService {
    pub fn new(config: ReportEnvConfig) -> Self {
        Self { config }
    }

    /// Validates the contact, then renders and writes the report.
    ///
    /// The renderer is constructed per export so a machine without fonts
    /// fails here, as a recoverable error, rather than at startup.
    pub fn generate(
        &self,
        contact: &ContactInfo,
        baseline: &BaselineMetrics,
        projection: &ImpactProjection,
        scenario: Scenario,
    ) -> Result<PathBuf, ReportGenerationError> {
        contact.validate()?;

        let renderer = ReportRenderer::new(&self.config)?;
        let path = renderer.export(
            &self.config.output_dir,
            contact,
            baseline,
            projection,
            scenario,
        )?;
        info!(
            "Generated impact report for {} at {}",
            contact.company,
            path.display()
        );
        Ok(path)
    }
}
