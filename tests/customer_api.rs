//! Customer API Tests
//!
//! Drives the full router in-process:
//! - Status codes for every operation and failure
//! - JSON bodies, including the `{"error": ...}` shape
//! - Path id wins over body id on update
//! - Failed requests never change the store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use crm::http_server::{build_router, HttpServerConfig};
use crm::store::{default_customers, CustomerStore, InMemoryCustomerStore};
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (Arc<InMemoryCustomerStore>, Router) {
    let store = Arc::new(InMemoryCustomerStore::seeded(default_customers()).unwrap());
    let config = HttpServerConfig {
        static_dir: None,
        ..Default::default()
    };
    let router = build_router(&config, store.clone());
    (store, router)
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        assert_eq!(content_type.as_deref(), Some("application/json"));
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn new_customer() -> Value {
    json!({
        "id": 4,
        "name": "X",
        "role": "Customer",
        "email": "x@x.com",
        "phone": "0",
        "contacted": false
    })
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_returns_seeded_records() {
    let (_store, router) = setup();

    let (status, body) = send(&router, Method::GET, "/customers", None).await;
    assert_eq!(status, StatusCode::OK);

    let map = body.as_object().unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    assert_eq!(map["2"]["name"], "Bob");
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let (_store, router) = setup();

    let (_, first) = send(&router, Method::GET, "/customers", None).await;
    let (_, second) = send(&router, Method::GET, "/customers", None).await;
    assert_eq!(first, second);
}

// =============================================================================
// Create / Get / Delete lifecycle
// =============================================================================

#[tokio::test]
async fn test_create_get_duplicate_delete_lifecycle() {
    let (_store, router) = setup();

    let (status, body) = send(&router, Method::POST, "/customers", Some(new_customer())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, new_customer());

    let (status, body) = send(&router, Method::GET, "/customers/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, new_customer());

    let (status, body) = send(&router, Method::POST, "/customers", Some(new_customer())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Customer with id 4 already exists"}));

    let (status, body) = send(&router, Method::DELETE, "/customers/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["1", "2", "3"]
    );

    let (status, body) = send(&router, Method::GET, "/customers/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Customer with id 4 not found"}));
}

#[tokio::test]
async fn test_duplicate_create_leaves_record_unchanged() {
    let (store, router) = setup();
    let original = store.get(1).unwrap();

    let mut body = new_customer();
    body["id"] = json!(1);
    let (status, _) = send(&router, Method::POST, "/customers", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.get(1).unwrap(), original);
}

#[tokio::test]
async fn test_create_defaults_contacted() {
    let (store, router) = setup();

    let body = json!({"id": 10, "name": "Dana", "role": "Lead", "email": "d@x.com", "phone": "1"});
    let (status, body) = send(&router, Method::POST, "/customers", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["contacted"], false);
    assert!(!store.get(10).unwrap().contacted);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_uses_path_id() {
    let (store, router) = setup();

    let body = json!({
        "id": 999,
        "name": "Bob2",
        "role": "Customer",
        "email": "bob2@email.com",
        "phone": "1",
        "contacted": true
    });
    let (status, body) = send(&router, Method::PUT, "/customers/2", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Bob2");

    let stored = store.get(2).unwrap();
    assert_eq!(stored.id, 2);
    assert_eq!(stored.name, "Bob2");
    assert!(stored.contacted);
    assert!(store.get(999).is_err());
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let (store, router) = setup();
    let before = store.list().unwrap();

    let (status, body) = send(&router, Method::PUT, "/customers/42", Some(new_customer())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
    assert_eq!(store.list().unwrap(), before);
}

// =============================================================================
// Malformed input
// =============================================================================

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let (_store, router) = setup();

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&router, method, "/customers/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    let (status, _) = send(&router, Method::PUT, "/customers/abc", Some(new_customer())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (store, router) = setup();
    let before = store.list().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/customers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Wrong field type decodes but fails the shape
    let (status, _) = send(&router, Method::POST, "/customers", Some(json!({"id": "four"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&router, Method::PUT, "/customers/1", Some(json!({"contacted": "yes"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let (_store, router) = setup();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/customers")
        .body(Body::from(new_customer().to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_record_count() {
    let (_store, router) = setup();

    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["customers"], 3);
}
