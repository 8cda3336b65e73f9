//! Data models for the contact book.
//!
//! This module contains the stored contact record and the raw form input
//! that new contacts are built from.

pub mod contact;
pub mod form;

pub use contact::{seed_contacts, sort_contacts, Contact};
pub use form::NewContactForm;
