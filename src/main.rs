//! Contact Book - Main entry point
//!
//! Loads configuration, builds the in-memory store and serves the contact
//! book over HTTP.

use anyhow::Result;
use contact_book::repositories::{ContactRepository, InMemoryContactRepository};
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{AppState, Config, MetricsTracker, PageRenderer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG takes precedence over LOG_LEVEL
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Initialize the contact store
    let repository: Arc<dyn ContactRepository> = if config.seed_contacts {
        Arc::new(InMemoryContactRepository::seeded())
    } else {
        Arc::new(InMemoryContactRepository::new())
    };

    info!("Contact store ready with {} contacts", repository.len().await);

    let metrics = MetricsTracker::new();
    let contacts = Arc::new(ContactServiceImpl::new(repository, metrics.clone()))
        as Arc<dyn ContactService>;

    let pages = match PageRenderer::new() {
        Ok(pages) => Arc::new(pages),
        Err(e) => {
            error!("Failed to load page templates: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(contacts, pages, metrics);

    info!("Serving static files from {}", config.public_dir.display());
    contact_book::server::run_server(&config, state).await?;

    info!("Contact book shutdown complete");
    Ok(())
}
