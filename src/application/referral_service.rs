use crate::domain::errors::{SubmissionError, ValidationError};
use crate::domain::ports::ReferralGateway;
use crate::domain::referral::{Friend, ReferralBatch};
use crate::infrastructure::import::{ImportError, read_roster};
use std::io::Read;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReferralFlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// In-progress referral form state, owned by whichever surface renders it.
///
/// A roster import parses the whole file first and only then extends the
/// form, so a rejected file leaves existing entries exactly as they were.
#[derive(Debug, Clone, Default)]
pub struct ReferralDraft {
    pub friends: Vec<Friend>,
    pub referrer_email: String,
}

impl ReferralDraft {
    /// Appends every contact from a CSV roster. Returns how many were added.
    pub fn import_roster<R: Read>(&mut self, reader: R) -> Result<usize, ImportError> {
        let imported = read_roster(reader)?;
        let count = imported.len();
        self.friends.extend(imported);
        info!("Imported {} contact(s) from roster", count);
        Ok(count)
    }

    /// Snapshot for submission; fully blank form rows are dropped.
    pub fn to_batch(&self) -> ReferralBatch {
        ReferralBatch {
            friends: self
                .friends
                .iter()
                .filter(|friend| !friend.is_blank())
                .cloned()
                .collect(),
            referrer_email: self.referrer_email.clone(),
        }
    }
}

/// Validates a batch locally, then hands it to the gateway once.
pub struct ReferralService {
    gateway: Arc<dyn ReferralGateway>,
}

impl ReferralService {
    pub fn new(gateway: Arc<dyn ReferralGateway>) -> Self {
        Self { gateway }
    }

    /// Returns the number of contacts submitted. On any error the caller's
    /// form state is untouched and the user may resubmit.
    pub async fn submit(&self, batch: &ReferralBatch) -> Result<usize, ReferralFlowError> {
        batch.validate()?;
        self.gateway.submit(batch).await?;
        info!("Submitted referral batch of {} contact(s)", batch.friends.len());
        Ok(batch.friends.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingGateway {
        calls: Mutex<Vec<ReferralBatch>>,
        response: Option<SubmissionError>,
    }

    impl RecordingGateway {
        fn accepting() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response: None,
            })
        }

        fn rejecting(error: SubmissionError) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response: Some(error),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ReferralGateway for RecordingGateway {
        async fn submit(&self, batch: &ReferralBatch) -> Result<(), SubmissionError> {
            self.calls.lock().unwrap().push(batch.clone());
            match &self.response {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    fn valid_batch() -> ReferralBatch {
        ReferralBatch {
            friends: vec![
                Friend {
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    email: "ada@example.com".to_string(),
                },
                Friend {
                    first_name: "Grace".to_string(),
                    last_name: "Hopper".to_string(),
                    email: "grace@example.com".to_string(),
                },
            ],
            referrer_email: "referrer@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_batch_reaches_the_gateway_once() {
        let gateway = RecordingGateway::accepting();
        let service = ReferralService::new(gateway.clone());

        let submitted = service.submit(&valid_batch()).await.unwrap();
        assert_eq!(submitted, 2);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_batch_never_reaches_the_gateway() {
        let gateway = RecordingGateway::accepting();
        let service = ReferralService::new(gateway.clone());

        let mut batch = valid_batch();
        batch.friends[1].email = "broken".to_string();

        let err = service.submit(&batch).await.unwrap_err();
        assert!(matches!(err, ReferralFlowError::Validation(_)));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_gateway_rejection_surfaces_to_the_caller() {
        let gateway = RecordingGateway::rejecting(SubmissionError::AlreadyReferred);
        let service = ReferralService::new(gateway.clone());

        let err = service.submit(&valid_batch()).await.unwrap_err();
        assert!(matches!(
            err,
            ReferralFlowError::Submission(SubmissionError::AlreadyReferred)
        ));
    }

    #[test]
    fn test_failed_import_leaves_the_draft_untouched() {
        let mut draft = ReferralDraft {
            friends: valid_batch().friends,
            referrer_email: "referrer@example.com".to_string(),
        };

        let bad_csv = "firstName,lastName\nAda,Lovelace\n";
        assert!(draft.import_roster(bad_csv.as_bytes()).is_err());
        assert_eq!(draft.friends.len(), 2);
        assert_eq!(draft.referrer_email, "referrer@example.com");
    }

    #[test]
    fn test_import_appends_to_existing_entries() {
        let mut draft = ReferralDraft::default();
        let csv = "firstName,lastName,email\n\
                   Ada,Lovelace,ada@example.com\n\
                   Grace,Hopper,grace@example.com\n\
                   Edith,Clarke,edith@example.com\n";
        let added = draft.import_roster(csv.as_bytes()).unwrap();
        assert_eq!(added, 3);
        assert_eq!(draft.friends.len(), 3);
    }

    #[test]
    fn test_blank_form_rows_are_dropped_from_the_batch() {
        let mut draft = ReferralDraft::default();
        draft.friends.push(Friend::default());
        draft.friends.push(Friend {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        });
        draft.referrer_email = "referrer@example.com".to_string();

        let batch = draft.to_batch();
        assert_eq!(batch.friends.len(), 1);
    }
}
