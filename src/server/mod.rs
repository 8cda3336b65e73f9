//! HTTP server for the contact book.
//!
//! This module wires the handlers into an axum router, serves static files
//! from the public directory and logs every request through `tower-http`.

pub mod handlers;
pub mod pages;

pub use handlers::AppState;
pub use pages::PageRenderer;

use crate::config::Config;
use crate::error::ServerResult;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

/// Build the application router.
///
/// Requests that match no route fall through to files under `public_dir`.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/contacts", get(handlers::list_contacts))
        .route(
            "/contacts/new",
            get(handlers::new_contact_form).post(handlers::create_contact),
        )
        .route("/metrics", get(handlers::metrics))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Run the contact book server until Ctrl-C is received.
///
/// # Arguments
/// * `config` - Bind address and static file directory
/// * `state` - Services shared with the handlers
///
/// # Returns
/// An error if the listener cannot be bound or the server fails
pub async fn run_server(config: &Config, state: AppState) -> ServerResult<()> {
    let app = build_router(state, &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
