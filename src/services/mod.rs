//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! repositories and the validation pipeline. They provide a clean boundary
//! between the HTTP handlers and the data access layer.

mod contact_service;
pub mod validation;

pub use contact_service::{ContactService, ContactServiceImpl, CreateContactOutcome};
pub use validation::{validate_submission, ValidationResult};
