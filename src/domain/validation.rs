use crate::domain::errors::ValidationError;

/// Structural email check: one `@`, a non-empty local part, and a dotted
/// domain with no whitespace. Deliverability is the API's problem.
pub fn is_valid_email(raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    // Domain needs at least one dot with labels on both sides.
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

/// Rejects blank values; whitespace-only input counts as missing.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// Required + well-formed email in one step.
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;
    if !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail {
            value: value.trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "jane@example.com",
            "jane.doe+leads@example.co.uk",
            "j@sub.domain.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "jane@",
            "jane@nodot",
            "jane@.example.com",
            "jane@example.com.",
            "jane@exam..ple.com",
            "jane doe@example.com",
            "jane@exa mple.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_require_treats_whitespace_as_missing() {
        assert!(require("name", "Jane").is_ok());
        assert_eq!(
            require("name", "   "),
            Err(ValidationError::MissingField { field: "name" })
        );
    }

    #[test]
    fn test_require_email_distinguishes_missing_from_invalid() {
        assert_eq!(
            require_email("email", ""),
            Err(ValidationError::MissingField { field: "email" })
        );
        assert!(matches!(
            require_email("email", "nope"),
            Err(ValidationError::InvalidEmail { .. })
        ));
        assert!(require_email("email", "jane@example.com").is_ok());
    }
}
