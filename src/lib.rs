//! crm - An in-memory customer record service over HTTP
//!
//! - [`store`]: the record store and its invariants
//! - [`http_server`]: request handlers and router
//! - [`observability`]: logging
//! - [`cli`]: configuration and process entry

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
