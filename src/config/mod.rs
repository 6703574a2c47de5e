//! Configuration module for revlift.
//!
//! This module provides structured configuration loading from environment
//! variables, organized by concern: the lead API and report output.

mod api_config;
mod report_config;

pub use api_config::ReferralApiEnvConfig;
pub use report_config::ReportEnvConfig;

use anyhow::{Context, Result};
use url::Url;

/// Main application configuration.
///
/// Aggregates all configuration from sub-modules. Loaded once at startup by
/// each binary, after `dotenvy::dotenv()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ReferralApiEnvConfig,
    pub report: ReportEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api = ReferralApiEnvConfig::from_env();
        let report = ReportEnvConfig::from_env();

        // Catch endpoint typos at startup rather than on first submit.
        Url::parse(&api.endpoint)
            .with_context(|| format!("Invalid REFERRAL_API_URL: {}", api.endpoint))?;

        Ok(Self { api, report })
    }
}
