//! Email address format validation
//!
//! The check is purely syntactic. An address is accepted when it has the
//! shape `local@label.label[.label...]`: exactly one `@`, a non-empty local
//! part, a domain of two or more non-empty dot-separated labels, and no
//! whitespace anywhere. Surrounding whitespace is rejected rather than
//! trimmed.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$";

/// Why a candidate string is not a valid email address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email address is empty")]
    Empty,
    #[error("email address must not contain whitespace")]
    ContainsWhitespace,
    #[error("email address is missing '@'")]
    MissingAt,
    #[error("email address contains more than one '@'")]
    MultipleAt,
    #[error("email address has an empty local part")]
    EmptyLocalPart,
    #[error("email domain must be dot-separated labels, e.g. example.com")]
    InvalidDomain,
}

/// An email address that passed [`validate_email`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidEmail(String);

impl ValidEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex"))
}

/// Validate an email-shaped string.
pub fn validate_email(candidate: &str) -> Result<ValidEmail, EmailError> {
    if candidate.is_empty() {
        return Err(EmailError::Empty);
    }
    if candidate.chars().any(char::is_whitespace) {
        return Err(EmailError::ContainsWhitespace);
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return Err(EmailError::MissingAt);
    };
    if domain.contains('@') {
        return Err(EmailError::MultipleAt);
    }
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }

    if email_regex().is_match(candidate) {
        Ok(ValidEmail(candidate.to_string()))
    } else {
        Err(EmailError::InvalidDomain)
    }
}
