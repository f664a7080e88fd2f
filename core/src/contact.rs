//! Contact-form validation
//!
//! Pure checks over the submitted fields. Every failing field is reported
//! in one pass so the form can mark them all at once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// One failed validation rule, with a message fit for display next to the
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

/// A submitted contact form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub const MIN_NAME_CHARS: usize = 2;
    pub const MIN_MESSAGE_CHARS: usize = 10;

    /// Check every field, reporting all failures at once.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < Self::MIN_NAME_CHARS {
            errors.push(FieldError {
                field: ContactField::Name,
                message: format!(
                    "Name must be at least {} characters",
                    Self::MIN_NAME_CHARS
                ),
            });
        }
        if !is_valid_email(self.email.trim()) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Enter a valid email address".to_string(),
            });
        }
        if self.message.trim().chars().count() < Self::MIN_MESSAGE_CHARS {
            errors.push(FieldError {
                field: ContactField::Message,
                message: format!(
                    "Message must be at least {} characters",
                    Self::MIN_MESSAGE_CHARS
                ),
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@` separating a
/// non-empty local part from a domain whose last dot has text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        let form = submission("Ada", "ada@example.com", "I would like to hire you.");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn all_failures_reported_together() {
        let form = submission("A", "not-an-email", "short");
        let errors = form.validate().unwrap_err();

        let fields: Vec<ContactField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [ContactField::Name, ContactField::Email, ContactField::Message],
            "Every failing field must be reported in one pass"
        );
    }

    #[test]
    fn name_is_trimmed_before_length_check() {
        let form = submission("  A  ", "ada@example.com", "A long enough message.");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ContactField::Name);
    }

    #[test]
    fn message_must_reach_minimum_length() {
        let form = submission("Ada", "ada@example.com", "  too short  ");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, ContactField::Message);
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.example"));
        assert!(is_valid_email("user+tag@example.co"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@."));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@exam ple.com"));
        assert!(!is_valid_email("a@@example.com"));
    }
}
