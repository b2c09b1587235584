//! Customer use cases over an injected repository.

use crate::entity::{Customer, NewCustomer};
use crate::error::AppError;
use crate::repository::CustomerRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn CustomerRepository> {
        &self.repo
    }

    pub async fn add(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        self.repo.add(customer).await
    }

    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        self.repo.get_by_id(id).await
    }

    /// Fails with NotFound before touching the row when `id` is absent.
    pub async fn update(&self, id: i32, patch: NewCustomer) -> Result<Customer, AppError> {
        self.repo.get_by_id(id).await?;
        tracing::debug!(id, "updating customer");
        self.repo.update(id, patch).await
    }

    /// Fails with NotFound when `id` is absent.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        self.repo.get_by_id(id).await?;
        tracing::debug!(id, "removing customer");
        self.repo.remove(id).await
    }
}
