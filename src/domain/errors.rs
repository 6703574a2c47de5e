use thiserror::Error;

/// Errors raised by local form validation. These block the operation before
/// anything leaves the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },

    #[error("Add at least one contact before submitting")]
    EmptyBatch,
}

/// Errors raised while submitting a referral batch to the lead API.
///
/// Messages are user-facing; callers surface them verbatim as notifications
/// and leave form state untouched so the user can resubmit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// HTTP 400
    #[error("The referral request was invalid. Please double-check the details and try again.")]
    InvalidRequest,

    /// HTTP 409
    #[error("One or more of these contacts has already been referred.")]
    AlreadyReferred,

    /// HTTP 422
    #[error(
        "The submitted details could not be processed. Please verify the email addresses and try again."
    )]
    Unprocessable,

    /// Any other non-success status
    #[error("Something went wrong submitting the referral (HTTP {status}). Please try again later.")]
    Unexpected { status: u16 },

    /// Request never produced a status
    #[error("Could not reach the referral service: {reason}")]
    Network { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages_name_the_field() {
        let err = ValidationError::MissingField { field: "company" };
        assert_eq!(err.to_string(), "company is required");

        let err = ValidationError::InvalidEmail {
            value: "not-an-email".to_string(),
        };
        assert!(err.to_string().contains("not-an-email"));
    }

    #[test]
    fn test_unexpected_submission_error_includes_status() {
        let err = SubmissionError::Unexpected { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}
