use crate::domain::errors::ValidationError;
use crate::domain::validation::{require, require_email};
use serde::{Deserialize, Serialize};

/// Executive details captured before a report is generated.
///
/// All five fields are required; beyond presence (and email shape) nothing
/// is checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl ContactInfo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("title", &self.title)?;
        require_email("email", &self.email)?;
        require("phone", &self.phone)?;
        require("company", &self.company)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_contact() -> ContactInfo {
        ContactInfo {
            name: "Jane Smith".to_string(),
            title: "Chief Revenue Officer".to_string(),
            email: "jane.smith@acme.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            company: "Acme Corporation".to_string(),
        }
    }

    #[test]
    fn test_complete_contact_passes() {
        assert!(complete_contact().validate().is_ok());
    }

    #[test]
    fn test_each_field_is_required() {
        let blank_outs: [(&str, fn(&mut ContactInfo)); 5] = [
            ("name", |c| c.name.clear()),
            ("title", |c| c.title.clear()),
            ("email", |c| c.email.clear()),
            ("phone", |c| c.phone.clear()),
            ("company", |c| c.company.clear()),
        ];

        for (field, blank) in blank_outs {
            let mut contact = complete_contact();
            blank(&mut contact);
            assert_eq!(
                contact.validate(),
                Err(ValidationError::MissingField { field }),
                "blanking {field} should fail validation"
            );
        }
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut contact = complete_contact();
        contact.email = "jane-at-acme".to_string();
        assert!(matches!(
            contact.validate(),
            Err(ValidationError::InvalidEmail { .. })
        ));
    }
}
