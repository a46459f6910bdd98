//! Observability for the customer service
//!
//! - Structured logging through `tracing`
//! - Named lifecycle and mutation events
//!
//! # Usage
//!
//! ```ignore
//! use crm::observability::{self, Event, LoggingConfig};
//!
//! observability::init(&LoggingConfig::default());
//! tracing::info!(event = %Event::Serving, addr = "0.0.0.0:3000");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init, LogFormat, LoggingConfig, Severity};
