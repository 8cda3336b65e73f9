//! Contact service layer.
//!
//! Business logic for listing contacts and accepting new-contact submissions.

use crate::models::{sort_contacts, Contact, NewContactForm};
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::ContactRepository;
use crate::services::validation::validate_submission;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Result of a new-contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateContactOutcome {
    /// The contact was stored; the caller should show the listing.
    Created(Contact),

    /// Validation failed; the caller should re-show the form with the
    /// messages and the normalized input. Nothing was stored.
    Redisplay {
        errors: Vec<String>,
        form: NewContactForm,
    },
}

impl CreateContactOutcome {
    /// Whether the submission was accepted.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts ordered by last name, then first name.
    async fn list_contacts(&self) -> Vec<Contact>;

    /// Validate a submission and store it if every stage passes.
    async fn create_contact(&self, form: NewContactForm) -> CreateContactOutcome;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    metrics: MetricsTracker,
    // Held across validate-then-append so a concurrent submission cannot
    // slip the same name in between the duplicate check and the insert.
    write_lock: Mutex<()>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>, metrics: MetricsTracker) -> Self {
        Self {
            repository,
            metrics,
            write_lock: Mutex::new(()),
        }
    }

    /// The metrics tracker this service reports into.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> Vec<Contact> {
        let contacts = sort_contacts(&self.repository.all().await);
        self.metrics.track_listing_served(contacts.len());
        contacts
    }

    async fn create_contact(&self, form: NewContactForm) -> CreateContactOutcome {
        let timer = Timer::new("create_contact");
        let _guard = self.write_lock.lock().await;

        let result = validate_submission(&form, self.repository.as_ref()).await;

        let contact = match result.contact {
            Some(contact) => contact,
            None => {
                let errors = result
                    .errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                debug!(error_count = errors.len(), "Contact submission rejected");
                self.metrics.track_submission_rejected(errors.len());
                timer.finish_with_status(false);
                return CreateContactOutcome::Redisplay {
                    errors,
                    form: result.input,
                };
            }
        };

        self.repository.append(contact.clone()).await;

        info!(name = %contact.full_name(), "Contact created");
        self.metrics.track_contact_created();
        timer.finish_with_status(true);

        CreateContactOutcome::Created(contact)
    }
}
