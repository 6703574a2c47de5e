use crate::config::ReferralApiEnvConfig;
use crate::domain::errors::SubmissionError;
use crate::domain::ports::ReferralGateway;
use crate::domain::referral::ReferralBatch;
use crate::infrastructure::core::HttpClientFactory;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{error, info};

// ===== Referral submission (REST API) =====

pub struct HttpReferralClient {
    client: Client,
    endpoint: String,
}

impl HttpReferralClient {
    pub fn new(config: &ReferralApiEnvConfig) -> Self {
        let client = HttpClientFactory::create_client(
            Duration::from_secs(config.timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        );
        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }
}

/// Maps a non-success response status to its user-facing error.
pub fn map_error_status(status: StatusCode) -> SubmissionError {
    match status.as_u16() {
        400 => SubmissionError::InvalidRequest,
        409 => SubmissionError::AlreadyReferred,
        422 => SubmissionError::Unprocessable,
        other => SubmissionError::Unexpected { status: other },
    }
}

#[async_trait]
impl ReferralGateway for HttpReferralClient {
    async fn submit(&self, batch: &ReferralBatch) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(batch)
            .send()
            .await
            .map_err(|e| {
                error!("Referral request failed before a response arrived: {}", e);
                SubmissionError::Network {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            info!(
                "Referral batch of {} contact(s) accepted (HTTP {})",
                batch.friends.len(),
                status.as_u16()
            );
            return Ok(());
        }

        // Keep the body for diagnostics; the user only sees the mapped message.
        let body = response.text().await.unwrap_or_default();
        error!(
            "Referral endpoint returned HTTP {}: {}",
            status.as_u16(),
            body
        );
        Err(map_error_status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_statuses_map_to_specific_messages() {
        assert_eq!(
            map_error_status(StatusCode::BAD_REQUEST),
            SubmissionError::InvalidRequest
        );
        assert_eq!(
            map_error_status(StatusCode::CONFLICT),
            SubmissionError::AlreadyReferred
        );
        assert_eq!(
            map_error_status(StatusCode::UNPROCESSABLE_ENTITY),
            SubmissionError::Unprocessable
        );
    }

    #[test]
    fn test_other_statuses_map_to_generic_message() {
        for status in [
            StatusCode::ACCEPTED,
            StatusCode::UNAUTHORIZED,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            assert_eq!(
                map_error_status(status),
                SubmissionError::Unexpected {
                    status: status.as_u16()
                }
            );
        }
    }
}
