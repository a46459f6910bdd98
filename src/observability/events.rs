//! Observable events
//!
//! Every log line the service emits about its own lifecycle or about a store
//! mutation carries one of these as its `event` field.

use std::fmt;

/// Observable events in the customer service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Service startup begins
    ServiceStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Store populated with seed records
    StoreSeeded,
    /// Listener bound, accepting requests
    Serving,

    // Store mutations
    /// Record inserted
    CustomerCreated,
    /// Record replaced
    CustomerUpdated,
    /// Record removed
    CustomerDeleted,

    // Requests
    /// Request answered with an error status
    RequestRejected,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServiceStart => "SERVICE_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "SERVING",
            Event::CustomerCreated => "CUSTOMER_CREATED",
            Event::CustomerUpdated => "CUSTOMER_UPDATED",
            Event::CustomerDeleted => "CUSTOMER_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
