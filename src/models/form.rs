//! Raw new-contact form input.

use serde::{Deserialize, Serialize};

/// The three fields submitted by the "new contact" form, exactly as entered.
///
/// Deserializes from `application/x-www-form-urlencoded` bodies using the
/// field names `firstName`, `lastName` and `phoneNumber`. Missing fields
/// are treated as empty so that they surface as "required" errors instead
/// of a rejected request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl NewContactForm {
    /// Create a form from raw values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Return a copy with leading and trailing whitespace removed from
    /// every field.
    ///
    /// A stray byte order mark at either end is stripped as well.
    pub fn normalized(&self) -> Self {
        Self {
            first_name: trim_field(&self.first_name),
            last_name: trim_field(&self.last_name),
            phone_number: trim_field(&self.phone_number),
        }
    }
}

fn trim_field(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}
