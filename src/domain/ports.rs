use crate::domain::errors::SubmissionError;
use crate::domain::referral::ReferralBatch;
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait ReferralGateway: Send + Sync {
    /// Posts one batch to the lead API. Fire-and-forget: no retries; a
    /// failure is reported to the caller and the batch is left untouched
    /// for resubmission.
    async fn submit(&self, batch: &ReferralBatch) -> Result<(), SubmissionError>;
}
