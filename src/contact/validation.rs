use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::form::{ContactForm, REQUIRED_FIELDS};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field")]
    MissingField,
    #[error("invalid email")]
    InvalidEmail,
}

impl ValidationError {
    /// Text shown to the visitor in the status message.
    pub fn user_message(self) -> &'static str {
        match self {
            ValidationError::MissingField => "გთხოვთ შეავსოთ ყველა სავალდებულო ველი",
            ValidationError::InvalidEmail => "გთხოვთ შეიყვანოთ სწორი ელ-ფოსტის მისამართი",
        }
    }
}

/// `local@domain.tld` with no whitespace or extra `@` in any part. The value is not trimmed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whitespace and byte-order marks only.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// Required fields first, then the email shape.
pub fn validate(form: &ContactForm) -> Result<(), ValidationError> {
    if REQUIRED_FIELDS
        .iter()
        .any(|field| is_blank(form.get(*field)))
    {
        return Err(ValidationError::MissingField);
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
