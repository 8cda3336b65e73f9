//! Submission validation pipeline.
//!
//! A submission is normalized once and then passed through a fixed sequence
//! of stages. Each stage inspects one field and reports at most one error,
//! so a submission produces between zero and three messages, in stage order.

use crate::domain::{Field, PersonName, PhoneNumber, ValidationError};
use crate::models::{Contact, NewContactForm};
use crate::repositories::ContactRepository;

/// Outcome of running the pipeline over one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Errors in stage order: first name, last name, phone number.
    pub errors: Vec<ValidationError>,

    /// The normalized input the stages ran against.
    pub input: NewContactForm,

    /// The contact built from the input, present only when every stage passed.
    pub contact: Option<Contact>,
}

impl ValidationResult {
    /// Whether no stage reported an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The user-facing messages, in stage order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check the first name.
pub fn check_first_name(form: &NewContactForm) -> Result<PersonName, ValidationError> {
    PersonName::new(form.first_name.as_str(), Field::FirstName)
}

/// Check the last name, then whether the full name is already taken.
///
/// The duplicate lookup is the last link of the last-name chain: it only
/// runs once the last name itself is well formed.
pub async fn check_last_name(
    form: &NewContactForm,
    repo: &dyn ContactRepository,
) -> Result<PersonName, ValidationError> {
    let last_name = PersonName::new(form.last_name.as_str(), Field::LastName)?;

    if repo
        .exists_by_name(&form.first_name, last_name.as_str())
        .await
    {
        return Err(ValidationError::NameTaken);
    }

    Ok(last_name)
}

/// Check the phone number.
pub fn check_phone_number(form: &NewContactForm) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::new(form.phone_number.as_str())
}

/// Normalize `form` and run every stage against it.
///
/// Read-only with respect to the repository.
pub async fn validate_submission(
    form: &NewContactForm,
    repo: &dyn ContactRepository,
) -> ValidationResult {
    let input = form.normalized();

    let first_name = check_first_name(&input);
    let last_name = check_last_name(&input, repo).await;
    let phone_number = check_phone_number(&input);

    match (first_name, last_name, phone_number) {
        (Ok(first), Ok(last), Ok(phone)) => ValidationResult {
            errors: Vec::new(),
            contact: Some(Contact::from_parts(first, last, phone)),
            input,
        },
        (first, last, phone) => ValidationResult {
            errors: [first.err(), last.err(), phone.err()]
                .into_iter()
                .flatten()
                .collect(),
            contact: None,
            input,
        },
    }
}
