//! Referral/lead API configuration parsing from environment variables.

use std::env;

/// Lead API environment configuration
#[derive(Debug, Clone)]
pub struct ReferralApiEnvConfig {
    /// Full URL of the referral endpoint.
    pub endpoint: String,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ReferralApiEnvConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/referrals".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl ReferralApiEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env::var("REFERRAL_API_URL").unwrap_or(defaults.endpoint),
            timeout_secs: env::var("REFERRAL_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: env::var("REFERRAL_API_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ReferralApiEnvConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.endpoint.starts_with("http"));
    }
}
