//! PhoneNumber value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("Failed to compile phone number regex")
});

/// Check a trimmed phone number.
///
/// Empty input yields [`ValidationError::Required`]; anything that is not
/// exactly `###-###-####` yields [`ValidationError::MalformedPhone`].
pub fn validate_phone(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::Required(Field::PhoneNumber))
    } else if !PHONE_REGEX.is_match(value) {
        Some(ValidationError::MalformedPhone)
    } else {
        None
    }
}

/// A phone number of the form `###-###-####`.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("281-330-8004").unwrap();
/// assert_eq!(phone.as_str(), "281-330-8004");
/// assert!(PhoneNumber::new("2813308004").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required` for empty input and
    /// `ValidationError::MalformedPhone` for anything else that does not match.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        match validate_phone(&phone) {
            Some(err) => Err(err),
            None => Ok(Self(phone)),
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
