//! In-process customer store. Ids start at 1 and are never reused.

use super::CustomerRepository;
use crate::entity::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Customer>,
    last_id: i32,
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    inner: RwLock<Inner>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn add(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let row = customer.with_id(inner.last_id);
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::customer_not_found(id))
    }

    async fn update(&self, id: i32, patch: NewCustomer) -> Result<Customer, AppError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::customer_not_found(id))?;
        row.name = patch.name;
        row.age = patch.age;
        row.email_address = patch.email_address;
        Ok(row.clone())
    }

    async fn remove(&self, id: i32) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::customer_not_found(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
