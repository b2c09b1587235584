//! Customer API: layered CRUD REST service (handlers, service, repository) over PostgreSQL.

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServiceConfig, StorageKind};
pub use entity::{Customer, CustomerPayload, NewCustomer};
pub use error::{AppError, ConfigError};
pub use openapi::ApiDoc;
pub use repository::{CustomerRepository, InMemoryCustomerRepository, PgCustomerRepository};
pub use routes::{app_router, common_routes, customer_routes};
pub use service::{CustomerService, CustomerValidator, ValidationResult};
pub use state::AppState;
pub use store::{ensure_customer_table, ensure_database_exists};
