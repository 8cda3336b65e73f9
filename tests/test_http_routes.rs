//! Tests that drive the full axum router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use contact_book::repositories::{ContactRepository, InMemoryContactRepository};
use contact_book::server::build_router;
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{AppState, MetricsTracker, PageRenderer};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(repo: Arc<InMemoryContactRepository>) -> Router {
    let metrics = MetricsTracker::new();
    let contacts =
        Arc::new(ContactServiceImpl::new(repo, metrics.clone())) as Arc<dyn ContactService>;
    let pages = Arc::new(PageRenderer::new().unwrap());
    build_router(AppState::new(contacts, pages, metrics), Path::new("public"))
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contacts/new")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_redirects_to_listing() {
    let app = app_with(Arc::new(InMemoryContactRepository::seeded()));

    let response = app.oneshot(get("/")).await.unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/contacts");
}

#[tokio::test]
async fn test_listing_is_sorted() {
    let app = app_with(Arc::new(InMemoryContactRepository::seeded()));

    let response = app.oneshot(get("/contacts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let order: Vec<usize> = ["Entiger, Max", "Jones, Mike", "Keys, Alicia", "Keys, Jenny"]
        .iter()
        .map(|name| html.find(name).unwrap())
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_new_contact_form_is_empty() {
    let app = app_with(Arc::new(InMemoryContactRepository::seeded()));

    let response = app.oneshot(get("/contacts/new")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("name=\"firstName\""));
    assert!(!html.contains("class=\"errors\""));
}

#[tokio::test]
async fn test_valid_submission_redirects_and_is_listed() {
    let repo = Arc::new(InMemoryContactRepository::seeded());
    let app = app_with(repo.clone());

    let response = app
        .clone()
        .oneshot(post_form(
            "firstName=Bob&lastName=Smith&phoneNumber=555-123-4567",
        ))
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/contacts");
    assert_eq!(repo.len().await, 5);

    let html = body_text(app.oneshot(get("/contacts")).await.unwrap()).await;
    let keys = html.find("Keys, Jenny").unwrap();
    let smith = html.find("Smith, Bob").unwrap();
    assert!(keys < smith);
}

#[tokio::test]
async fn test_duplicate_submission_redisplays_form() {
    let repo = Arc::new(InMemoryContactRepository::seeded());
    let app = app_with(repo.clone());

    let response = app
        .oneshot(post_form(
            "firstName=Mike&lastName=Jones&phoneNumber=281-330-8004",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Sorry that name is already taken."));
    assert!(html.contains("value=\"Mike\""));
    assert!(html.contains("value=\"Jones\""));
    assert!(html.contains("value=\"281-330-8004\""));
    assert_eq!(repo.len().await, 4);
}

#[tokio::test]
async fn test_invalid_submission_keeps_trimmed_values() {
    let repo = Arc::new(InMemoryContactRepository::new());
    let app = app_with(repo.clone());

    let response = app
        .oneshot(post_form("firstName=+Bob+&lastName=Sm1th&phoneNumber="))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("value=\"Bob\""));
    assert!(html.contains("Last name can only contain letters."));
    assert!(html.contains("Phone number is required."));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_missing_fields_are_required_errors() {
    let app = app_with(Arc::new(InMemoryContactRepository::new()));

    let response = app.oneshot(post_form("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("First name is required."));
    assert!(html.contains("Last name is required."));
    assert!(html.contains("Phone number is required."));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = app_with(Arc::new(InMemoryContactRepository::seeded()));

    app.clone()
        .oneshot(post_form(
            "firstName=Mike&lastName=Jones&phoneNumber=281-330-8004",
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["submissions_rejected_total"], 1);
    assert_eq!(json["validation_errors_total"], 1);
    assert_eq!(json["contacts_created_total"], 0);
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let app = app_with(Arc::new(InMemoryContactRepository::seeded()));

    let response = app
        .oneshot(get("/stylesheets/contacts.css"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = app_with(Arc::new(InMemoryContactRepository::seeded()));

    let response = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
