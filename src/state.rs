//! Shared application state for all routes.

use crate::repository::CustomerRepository;
use crate::service::{CustomerService, CustomerValidator};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub validator: CustomerValidator,
}

impl AppState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customers: CustomerService::new(repo),
            validator: CustomerValidator::new(),
        }
    }
}
