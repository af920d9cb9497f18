//! Field validation rules for the contact form.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// `local@domain.tld` shape: no whitespace, one `@`, a dot after it.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// The three contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Message => write!(f, "message"),
        }
    }
}

/// A user-correctable validation failure. The display text is shown inline
/// next to the offending field, verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Validate a single contact field. The value is trimmed before any rule
/// is applied, so whitespace-only input counts as empty.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    match field {
        ContactField::Name => {
            if value.is_empty() {
                Err(FieldError::NameRequired)
            } else if value.chars().count() < 2 {
                Err(FieldError::NameTooShort)
            } else {
                Ok(())
            }
        }
        ContactField::Email => {
            if value.is_empty() {
                Err(FieldError::EmailRequired)
            } else if !is_valid_email(value) {
                Err(FieldError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        ContactField::Message => {
            if value.is_empty() {
                Err(FieldError::MessageRequired)
            } else if value.chars().count() < 10 {
                Err(FieldError::MessageTooShort)
            } else {
                Ok(())
            }
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
