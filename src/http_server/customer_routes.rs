//! Customer HTTP Routes
//!
//! | Method | Path              | Success                        |
//! |--------|-------------------|--------------------------------|
//! | GET    | `/customers`      | 200, every record by id        |
//! | GET    | `/customers/:id`  | 200, the record                |
//! | POST   | `/customers`      | 201, the created record        |
//! | PUT    | `/customers/:id`  | 200, the updated record        |
//! | DELETE | `/customers/:id`  | 200, every remaining record    |
//!
//! On update the path id always wins over the id in the body.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::observability::Event;
use crate::store::{Customer, CustomerId, CustomerStore};

use super::errors::ApiResult;

/// Store shared across handlers
pub type CustomerState = Arc<dyn CustomerStore>;

/// Create customer routes
pub fn customer_routes(store: CustomerState) -> Router {
    Router::new()
        .route("/customers", get(list_customers_handler).post(create_customer_handler))
        .route(
            "/customers/:id",
            get(get_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
        .with_state(store)
}

// ==================
// Helper Functions
// ==================

/// Encode `value` as the JSON response body
///
/// Encoding failures surface as a JSON error body rather than axum's plain-text 500.
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> ApiResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

fn path_id(path: Result<Path<CustomerId>, PathRejection>) -> ApiResult<CustomerId> {
    let Path(id) = path?;
    Ok(id)
}

fn body_customer(body: Result<Json<Customer>, JsonRejection>) -> ApiResult<Customer> {
    let Json(customer) = body?;
    Ok(customer)
}

// ==================
// Handlers
// ==================

async fn list_customers_handler(State(store): State<CustomerState>) -> ApiResult<Response> {
    json_response(StatusCode::OK, &store.list()?)
}

async fn get_customer_handler(
    State(store): State<CustomerState>,
    path: Result<Path<CustomerId>, PathRejection>,
) -> ApiResult<Response> {
    let id = path_id(path)?;
    json_response(StatusCode::OK, &store.get(id)?)
}

async fn create_customer_handler(
    State(store): State<CustomerState>,
    body: Result<Json<Customer>, JsonRejection>,
) -> ApiResult<Response> {
    let customer = body_customer(body)?;
    store.add(customer.clone())?;
    info!(event = %Event::CustomerCreated, id = customer.id);
    json_response(StatusCode::CREATED, &customer)
}

async fn update_customer_handler(
    State(store): State<CustomerState>,
    path: Result<Path<CustomerId>, PathRejection>,
    body: Result<Json<Customer>, JsonRejection>,
) -> ApiResult<Response> {
    let id = path_id(path)?;
    let customer = body_customer(body)?.with_id(id);
    store.update(customer.clone())?;
    info!(event = %Event::CustomerUpdated, id);
    json_response(StatusCode::OK, &customer)
}

async fn delete_customer_handler(
    State(store): State<CustomerState>,
    path: Result<Path<CustomerId>, PathRejection>,
) -> ApiResult<Response> {
    let id = path_id(path)?;
    store.delete(id)?;
    info!(event = %Event::CustomerDeleted, id);
    json_response(StatusCode::OK, &store.list()?)
}
