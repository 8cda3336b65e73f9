//! Contact Book - a minimal in-memory contact list served over HTTP.
//!
//! Contacts (first name, last name, phone number) live in process memory.
//! The interesting part is the submission pipeline that decides whether a
//! new contact is accepted or the form is shown again with error messages.
//!
//! # Architecture
//!
//! - **domain**: Name and phone value objects with their validation rules
//! - **models**: The stored contact record and the raw form input
//! - **repositories**: The contact store abstraction and its in-memory implementation
//! - **services**: The validation pipeline and the contact service around it
//! - **server**: axum routes, page rendering and static files
//! - **observability**: Submission and listing counters
//! - **config**: Configuration from environment variables
//! - **error**: Configuration and server error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{Field, PersonName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ServerError};
pub use models::{Contact, NewContactForm};
pub use observability::{MetricsSummary, MetricsTracker};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::{AppState, PageRenderer};
pub use services::{ContactService, ContactServiceImpl, CreateContactOutcome, ValidationResult};
