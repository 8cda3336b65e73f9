//! Contact model representing a person in the contact book.

use crate::domain::{PersonName, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A validated contact.
///
/// Contacts are only built by the submission pipeline (or the seed data) and
/// are never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// First name, letters only
    pub first_name: String,

    /// Last name, letters only
    pub last_name: String,

    /// Phone number of the form `###-###-####`
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact from already validated fields.
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

    /// Create a contact from validated value objects.
    pub fn from_parts(first_name: PersonName, last_name: PersonName, phone: PhoneNumber) -> Self {
        Self {
            first_name: first_name.into_inner(),
            last_name: last_name.into_inner(),
            phone_number: phone.into_inner(),
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Last, First", the form shown in the listing.
    pub fn sort_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Whether this contact carries exactly the given first and last name.
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    /// Listing order: last name, then first name, byte-wise.
    pub fn listing_order(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
    }
}

/// Return a sorted copy of `contacts` ordered by (last name, first name).
///
/// The sort is stable, so fully equal names keep their insertion order.
pub fn sort_contacts(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(Contact::listing_order);
    sorted
}

/// The contacts every fresh process starts with.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Mike", "Jones", "281-330-8004"),
        Contact::new("Jenny", "Keys", "768-867-5309"),
        Contact::new("Max", "Entiger", "214-748-3647"),
        Contact::new("Alicia", "Keys", "515-489-4608"),
    ]
}
