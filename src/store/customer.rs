//! Customer record
//!
//! The value stored under its `id` in a [`CustomerStore`](super::CustomerStore).

use serde::{Deserialize, Serialize};

/// Customer identifier, assigned by the client on create
pub type CustomerId = i64;

/// A customer record
///
/// Absent fields decode to their zero value, so `{"id": 7}` is a valid
/// customer with empty contact fields and `contacted == false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Free text, no enumeration enforced
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        contacted: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            email: email.into(),
            phone: phone.into(),
            contacted,
        }
    }

    /// Return this record re-keyed under `id`
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }
}

/// Records the service is seeded with at startup
pub fn default_customers() -> Vec<Customer> {
    vec![
        Customer::new(
            1,
            "John Doe",
            "Customer",
            "email@email.com",
            "+49 12452 1234632",
            false,
        ),
        Customer::new(
            2,
            "Bob",
            "Customer",
            "cats@email.com",
            "+49 4542 123684932",
            false,
        ),
        Customer::new(
            3,
            "Amanda Smith",
            "Customer",
            "amanda@email.com",
            "+49 4542 123684932",
            false,
        ),
    ]
}
