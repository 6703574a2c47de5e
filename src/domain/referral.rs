use crate::domain::errors::ValidationError;
use crate::domain::validation::{require, require_email};
use serde::{Deserialize, Serialize};

/// One person being referred. Field names match the lead API's JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Friend {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("first name", &self.first_name)?;
        require("last name", &self.last_name)?;
        require_email("email", &self.email)?;
        Ok(())
    }

    /// True when every field is blank; such rows are dropped, not rejected.
    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty()
            && self.last_name.trim().is_empty()
            && self.email.trim().is_empty()
    }
}

/// The payload posted to the referral endpoint, serialized as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralBatch {
    pub friends: Vec<Friend>,
    pub referrer_email: String,
}

impl ReferralBatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.friends.is_empty() {
            return Err(ValidationError::EmptyBatch);
        }
        require_email("referrer email", &self.referrer_email)?;
        for friend in &self.friends {
            friend.validate()?;
        }
        Ok(())
    }
}
