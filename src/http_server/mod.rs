//! # HTTP Server Module
//!
//! Exposes the customer store over HTTP with an Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/customers`, `/customers/:id` - Customer CRUD
//! - everything else - static files

pub mod config;
pub mod customer_routes;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
