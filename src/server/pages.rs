//! HTML page rendering.
//!
//! Templates are compiled into the binary and parsed once at startup.
//! Template names end in `.html`, so Tera escapes every interpolated value.

use crate::error::ServerResult;
use crate::models::{Contact, NewContactForm};
use tera::{Context, Tera};

const LAYOUT: &str = include_str!("../../templates/layout.html");
const CONTACTS: &str = include_str!("../../templates/contacts.html");
const NEW_CONTACT: &str = include_str!("../../templates/new_contact.html");

/// Renders the contact listing and the new-contact form.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Parse the built-in templates.
    pub fn new() -> ServerResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", LAYOUT),
            ("contacts.html", CONTACTS),
            ("new_contact.html", NEW_CONTACT),
        ])?;
        Ok(Self { tera })
    }

    /// Render the listing for already sorted contacts.
    pub fn contacts_page(&self, contacts: &[Contact]) -> ServerResult<String> {
        let mut context = Context::new();
        context.insert("contacts", contacts);
        Ok(self.tera.render("contacts.html", &context)?)
    }

    /// Render the new-contact form, re-populated with `form` and listing
    /// `errors` above it.
    pub fn new_contact_page(
        &self,
        errors: &[String],
        form: &NewContactForm,
    ) -> ServerResult<String> {
        let mut context = Context::new();
        context.insert("error_messages", errors);
        context.insert("first_name", &form.first_name);
        context.insert("last_name", &form.last_name);
        context.insert("phone_number", &form.phone_number);
        Ok(self.tera.render("new_contact.html", &context)?)
    }
}
