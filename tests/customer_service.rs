#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Service-level tests: delegation, existence pre-checks and NotFound propagation.

use async_trait::async_trait;
use customer_api::{
    AppError, Customer, CustomerRepository, CustomerService, InMemoryCustomerRepository, NewCustomer,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Delegates to an in-memory store and counts calls per operation.
#[derive(Default)]
struct CountingRepository {
    inner: InMemoryCustomerRepository,
    adds: AtomicUsize,
    get_alls: AtomicUsize,
    gets: AtomicUsize,
    updates: AtomicUsize,
    removes: AtomicUsize,
}

#[async_trait]
impl CustomerRepository for CountingRepository {
    async fn add(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        self.inner.add(customer).await
    }

    async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        self.get_alls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id).await
    }

    async fn update(&self, id: i32, patch: NewCustomer) -> Result<Customer, AppError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, patch).await
    }

    async fn remove(&self, id: i32) -> Result<(), AppError> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(id).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn count(c: &AtomicUsize) -> usize {
    c.load(Ordering::SeqCst)
}

fn setup() -> (Arc<CountingRepository>, CustomerService) {
    let repo = Arc::new(CountingRepository::default());
    let service = CustomerService::new(repo.clone());
    (repo, service)
}

fn new_customer(name: &str, age: i32, email: &str) -> NewCustomer {
    NewCustomer {
        name: name.into(),
        age,
        email_address: email.into(),
    }
}

#[tokio::test]
async fn add_then_get_by_id_returns_same_record() {
    let (repo, service) = setup();
    let added = service.add(new_customer("Test", 20, "Test@tarktech.com")).await.unwrap();
    assert_eq!(added.id, 1);
    assert_eq!(count(&repo.adds), 1);

    let fetched = service.get_by_id(added.id).await.unwrap();
    assert_eq!(fetched, added);
}

#[tokio::test]
async fn get_all_delegates_once() {
    let (repo, service) = setup();
    service.add(new_customer("A", 20, "a@example.com")).await.unwrap();
    service.add(new_customer("B", 30, "b@example.com")).await.unwrap();

    let all = service.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(count(&repo.get_alls), 1);
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
    let (_repo, service) = setup();
    assert!(matches!(service.get_by_id(1).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
    let (repo, service) = setup();
    let added = service.add(new_customer("Test", 20, "Test@outlook.com")).await.unwrap();

    let updated = service
        .update(added.id, new_customer("TestCustomer", 25, "Test@outlook.com"))
        .await
        .unwrap();
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.name, "TestCustomer");
    assert_eq!(updated.age, 25);

    let fetched = service.get_by_id(added.id).await.unwrap();
    assert_eq!(fetched, updated);
    assert_eq!(count(&repo.updates), 1);
}

#[tokio::test]
async fn update_checks_existence_first() {
    let (repo, service) = setup();
    let added = service.add(new_customer("Test", 20, "t@example.com")).await.unwrap();
    service.update(added.id, new_customer("Other", 40, "o@example.com")).await.unwrap();
    assert_eq!(count(&repo.gets), 1);
    assert_eq!(count(&repo.updates), 1);
}

#[tokio::test]
async fn update_missing_fails_before_repository_update() {
    let (repo, service) = setup();
    let err = service
        .update(1, new_customer("Test", 20, "Test@outlook.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(count(&repo.gets), 1);
    assert_eq!(count(&repo.updates), 0);
}

#[tokio::test]
async fn remove_then_get_by_id_is_not_found() {
    let (repo, service) = setup();
    let added = service.add(new_customer("Test", 20, "Test@gmail.com")).await.unwrap();

    service.remove(added.id).await.unwrap();
    assert_eq!(count(&repo.removes), 1);
    assert!(matches!(service.get_by_id(added.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn remove_missing_fails_before_repository_remove() {
    let (repo, service) = setup();
    let err = service.remove(1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(count(&repo.gets), 1);
    assert_eq!(count(&repo.removes), 0);
}

#[tokio::test]
async fn remove_twice_second_is_not_found() {
    let (_repo, service) = setup();
    let added = service.add(new_customer("Test", 20, "t@example.com")).await.unwrap();
    service.remove(added.id).await.unwrap();
    assert!(matches!(service.remove(added.id).await, Err(AppError::NotFound(_))));
}
