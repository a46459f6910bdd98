//! In-memory customer store
//!
//! Each operation takes the lock once, so the effect of `add`, `update` and
//! `delete` is visible exactly once to every later call.

use std::collections::btree_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::{Customer, CustomerId, CustomerMap, CustomerStore};

/// Customer store backed by an ordered map
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    records: RwLock<CustomerMap>,
}

impl InMemoryCustomerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `customers`
    ///
    /// Fails with `DuplicateKey` if two seed records share an id.
    pub fn seeded(customers: impl IntoIterator<Item = Customer>) -> StoreResult<Self> {
        let store = Self::new();
        for customer in customers {
            store.add(customer)?;
        }
        Ok(store)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, CustomerMap>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, CustomerMap>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn add(&self, customer: Customer) -> StoreResult<()> {
        let mut records = self.write()?;
        match records.entry(customer.id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(customer.id)),
            Entry::Vacant(slot) => {
                slot.insert(customer);
                Ok(())
            }
        }
    }

    fn get(&self, id: CustomerId) -> StoreResult<Customer> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, customer: Customer) -> StoreResult<()> {
        let mut records = self.write()?;
        let existing = records
            .get_mut(&customer.id)
            .ok_or(StoreError::NotFound(customer.id))?;
        *existing = customer;
        Ok(())
    }

    fn delete(&self, id: CustomerId) -> StoreResult<()> {
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> StoreResult<CustomerMap> {
        Ok(self.read()?.clone())
    }
}
