use crate::models::{seed_contacts, Contact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Contact repository backed by a vector held in process memory.
///
/// Contents live only as long as the process. Readers share the lock;
/// appends take it exclusively.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `contacts`, in order.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Create a repository holding the default seed contacts.
    pub fn seeded() -> Self {
        Self::with_contacts(seed_contacts())
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn append(&self, contact: Contact) {
        self.contacts.write().await.push(contact);
    }

    async fn all(&self) -> Vec<Contact> {
        self.contacts.read().await.clone()
    }

    async fn exists_by_name(&self, first_name: &str, last_name: &str) -> bool {
        self.contacts
            .read()
            .await
            .iter()
            .any(|contact| contact.has_name(first_name, last_name))
    }

    async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }
}
