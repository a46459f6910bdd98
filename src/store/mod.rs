//! # Customer Store
//!
//! Owns every customer record, keyed by id.
//!
//! # Invariants
//!
//! - At most one record per id
//! - `add` fails on an existing id, `get`/`update`/`delete` fail on an absent id
//! - A failed operation leaves the store unchanged
//!
//! Nothing outside a [`CustomerStore`] implementation touches the container.

mod customer;
mod errors;
mod memory;

use std::collections::BTreeMap;

pub use customer::{default_customers, Customer, CustomerId};
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryCustomerStore;

/// Snapshot of the store, ordered by id
pub type CustomerMap = BTreeMap<CustomerId, Customer>;

/// The record store interface
pub trait CustomerStore: Send + Sync {
    /// Insert `customer` under its id, failing with `DuplicateKey` if taken
    fn add(&self, customer: Customer) -> StoreResult<()>;

    /// Fetch the record for `id`
    fn get(&self, id: CustomerId) -> StoreResult<Customer>;

    /// Replace the whole record at `customer.id`, failing with `NotFound` if absent
    fn update(&self, customer: Customer) -> StoreResult<()>;

    /// Remove the record at `id`
    fn delete(&self, id: CustomerId) -> StoreResult<()>;

    /// Copy of every record
    fn list(&self) -> StoreResult<CustomerMap>;
}
