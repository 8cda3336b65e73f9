//! Domain validation errors.

use std::fmt;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
}

impl Field {
    /// Human-readable label used as the subject of error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::PhoneNumber => "Phone number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur while validating a new contact submission.
///
/// Every variant is recoverable and user-facing: the `Display` output is the
/// exact message shown on the re-rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was empty after trimming.
    Required(Field),

    /// The field exceeds the maximum allowed length.
    TooLong { field: Field, max: usize },

    /// The field contains something other than ASCII letters.
    InvalidCharacters(Field),

    /// A contact with the same first and last name already exists.
    NameTaken,

    /// The phone number is not of the form `###-###-####`.
    MalformedPhone,
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) | Self::InvalidCharacters(field) => *field,
            Self::TooLong { field, .. } => *field,
            Self::NameTaken => Field::LastName,
            Self::MalformedPhone => Field::PhoneNumber,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required.", field),
            Self::TooLong { field, max } => {
                write!(f, "{} must not exceed {} characters.", field, max)
            }
            Self::InvalidCharacters(field) => write!(f, "{} can only contain letters.", field),
            Self::NameTaken => write!(f, "Sorry that name is already taken."),
            Self::MalformedPhone => write!(f, "Phone number must be of form ###-###-####."),
        }
    }
}

impl std::error::Error for ValidationError {}
