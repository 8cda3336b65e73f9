use async_trait::async_trait;
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a contact to the mock repository without counting a call.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Add multiple contacts to the mock repository.
    pub fn add_contacts(&self, contacts_list: Vec<Contact>) {
        self.contacts.lock().unwrap().extend(contacts_list);
    }

    /// Snapshot of the stored contacts.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn append(&self, contact: Contact) {
        self.track_call("append");
        self.contacts.lock().unwrap().push(contact);
    }

    async fn all(&self) -> Vec<Contact> {
        self.track_call("all");
        self.contacts.lock().unwrap().clone()
    }

    async fn exists_by_name(&self, first_name: &str, last_name: &str) -> bool {
        self.track_call("exists_by_name");
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .any(|contact| contact.has_name(first_name, last_name))
    }

    async fn len(&self) -> usize {
        self.track_call("len");
        self.contacts.lock().unwrap().len()
    }
}
