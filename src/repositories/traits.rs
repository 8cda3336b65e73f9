use crate::models::Contact;
use async_trait::async_trait;

/// Repository for storing contacts.
///
/// Provides abstraction over contact storage so the submission pipeline can
/// run against a fresh in-memory store in tests and a seeded one in the
/// server. Store access cannot fail, so operations return plain values.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Append a contact. Insertion order is preserved.
    async fn append(&self, contact: Contact);

    /// All contacts in insertion order.
    async fn all(&self) -> Vec<Contact>;

    /// Whether a contact with exactly this first and last name exists.
    ///
    /// The comparison is case-sensitive.
    async fn exists_by_name(&self, first_name: &str, last_name: &str) -> bool;

    /// Number of stored contacts.
    async fn len(&self) -> usize;

    /// Whether the store holds no contacts.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
