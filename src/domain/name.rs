//! PersonName value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Maximum length of a first or last name, in characters.
pub const MAX_NAME_LENGTH: usize = 25;

static NON_LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z]").expect("Failed to compile name character regex"));

/// Check a trimmed name against the name rules.
///
/// Rules are applied in priority order and the first failure wins:
///
/// 1. empty → [`ValidationError::Required`]
/// 2. longer than [`MAX_NAME_LENGTH`] → [`ValidationError::TooLong`]
/// 3. anything but `A-Z`/`a-z` → [`ValidationError::InvalidCharacters`]
pub fn validate_name(value: &str, field: Field) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::Required(field))
    } else if value.chars().count() > MAX_NAME_LENGTH {
        Some(ValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        })
    } else if NON_LETTER_REGEX.is_match(value) {
        Some(ValidationError::InvalidCharacters(field))
    } else {
        None
    }
}

/// A first or last name that passed [`validate_name`].
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, PersonName};
///
/// let name = PersonName::new("Alicia", Field::FirstName).unwrap();
/// assert_eq!(name.as_str(), "Alicia");
/// assert!(PersonName::new("Mary-Jane", Field::FirstName).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName for the given field.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, see [`validate_name`].
    pub fn new(name: impl Into<String>, field: Field) -> Result<Self, ValidationError> {
        let name = name.into();
        match validate_name(&name, field) {
            Some(err) => Err(err),
            None => Ok(Self(name)),
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
