//! Field rules shared by upstream records and submitted forms.

use std::sync::OnceLock;

use regex::Regex;

/// Reasons an upstream record is refused before reaching the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordValidationError {
    /// A field that must be a UUID was not one.
    #[error("{field} must be a UUID")]
    InvalidUuid { field: &'static str },
    /// A field that must be an email address was not one.
    #[error("{field} must be an email address")]
    InvalidEmail { field: &'static str },
    /// A numeric field was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    /// A numeric field fell below its lower bound.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    /// A field that must be an integer carried a fraction.
    #[error("{field} must be an integer")]
    NotInteger { field: &'static str },
    /// A timestamp could not be interpreted.
    #[error("{field} must be a date")]
    InvalidTimestamp { field: &'static str },
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Whether `value` looks like a deliverable email address.
///
/// Local parts may not start with a dot nor contain consecutive dots.
///
/// # Examples
/// ```
/// use tripfront::domain::is_valid_email;
///
/// assert!(is_valid_email("ana@example.com"));
/// assert!(!is_valid_email("ana@localhost"));
/// assert!(!is_valid_email(".ana@example.com"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

pub(crate) fn finite(value: f64, field: &'static str) -> Result<f64, RecordValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RecordValidationError::NonFinite { field })
    }
}
