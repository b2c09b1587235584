//! Persistence for customers, keyed by integer id.

mod memory;
mod postgres;
pub use memory::InMemoryCustomerRepository;
pub use postgres::{PgCustomerRepository, CUSTOMERS_TABLE};

use crate::entity::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// CRUD over the customer store. Every mutating call commits on its own.
/// Lookups of an absent id fail with `AppError::NotFound`.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert and return the stored row with its assigned id.
    async fn add(&self, customer: NewCustomer) -> Result<Customer, AppError>;

    async fn get_all(&self) -> Result<Vec<Customer>, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Customer, AppError>;

    /// Overwrite name, age and email of an existing row. The id is kept.
    async fn update(&self, id: i32, patch: NewCustomer) -> Result<Customer, AppError>;

    async fn remove(&self, id: i32) -> Result<(), AppError>;

    /// Cheap round-trip to the backing store, used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
