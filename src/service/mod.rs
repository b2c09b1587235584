//! Service layer between HTTP handlers and the repository, plus request validation.

mod customer;
mod validation;
pub use customer::CustomerService;
pub use validation::{
    is_valid_email, CustomerValidator, ValidationFailure, ValidationResult, AGE_AT_LEAST_18,
    INVALID_EMAIL, NAME_REQUIRED,
};
