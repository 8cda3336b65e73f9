//! HTTP handlers for the contact book.
//!
//! Handlers translate requests into [`ContactService`] calls and service
//! outcomes into redirects or rendered pages.

use crate::error::ServerResult;
use crate::models::NewContactForm;
use crate::observability::{MetricsSummary, MetricsTracker};
use crate::server::pages::PageRenderer;
use crate::services::{ContactService, CreateContactOutcome};
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
    pub pages: Arc<PageRenderer>,
    pub metrics: MetricsTracker,
}

impl AppState {
    pub fn new(
        contacts: Arc<dyn ContactService>,
        pages: Arc<PageRenderer>,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            contacts,
            pages,
            metrics,
        }
    }
}

pub async fn index() -> Redirect {
    Redirect::to("/contacts")
}

pub async fn list_contacts(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let contacts = state.contacts.list_contacts().await;
    Ok(Html(state.pages.contacts_page(&contacts)?))
}

pub async fn new_contact_form(State(state): State<AppState>) -> ServerResult<Html<String>> {
    Ok(Html(
        state
            .pages
            .new_contact_page(&[], &NewContactForm::default())?,
    ))
}

/// Create a contact, or re-render the form with the validation messages.
pub async fn create_contact(
    State(state): State<AppState>,
    Form(form): Form<NewContactForm>,
) -> ServerResult<Response> {
    match state.contacts.create_contact(form).await {
        CreateContactOutcome::Created(_) => Ok(Redirect::to("/contacts").into_response()),
        CreateContactOutcome::Redisplay { errors, form } => {
            let page = state.pages.new_contact_page(&errors, &form)?;
            Ok(Html(page).into_response())
        }
    }
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSummary> {
    Json(state.metrics.summary())
}
