//! Customer field rules: name present, age at least 18, well-formed email.

use crate::entity::{CustomerPayload, NewCustomer};
use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Customer name must be not null";
pub const AGE_AT_LEAST_18: &str = "Customer Age must be greater than or equal to 18";
pub const INVALID_EMAIL: &str = "Please enter the valid email";

const MINIMUM_AGE: i32 = 18;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([a-z0-9]([a-z0-9-]*[a-z0-9])?\.)+[a-z0-9]([a-z0-9-]*[a-z0-9])?$"#,
    )
    .expect("email pattern compiles")
});

/// One failed rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of running every rule. Failures keep rule order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationFailure>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn messages_for(&self, field: &str) -> Vec<&'static str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&joined)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CustomerValidator;

impl CustomerValidator {
    pub fn new() -> Self {
        CustomerValidator
    }

    /// Evaluate all rules; never short-circuits.
    pub fn validate(&self, payload: &CustomerPayload) -> ValidationResult {
        let mut errors = Vec::new();
        if payload.name.is_none() {
            errors.push(ValidationFailure {
                field: "name",
                message: NAME_REQUIRED,
            });
        }
        if payload.age < MINIMUM_AGE {
            errors.push(ValidationFailure {
                field: "age",
                message: AGE_AT_LEAST_18,
            });
        }
        // Null email fails too: the column is NOT NULL, so this rule does not skip absent values.
        let email_ok = payload
            .email_address
            .as_deref()
            .map(is_valid_email)
            .unwrap_or(false);
        if !email_ok {
            errors.push(ValidationFailure {
                field: "emailAddress",
                message: INVALID_EMAIL,
            });
        }
        ValidationResult { errors }
    }

    /// Validate and convert into a write the repository accepts.
    pub fn check(&self, payload: CustomerPayload) -> Result<NewCustomer, AppError> {
        let result = self.validate(&payload);
        if !result.is_valid() {
            return Err(AppError::Validation(result));
        }
        match (payload.name, payload.email_address) {
            (Some(name), Some(email_address)) => Ok(NewCustomer {
                name,
                age: payload.age,
                email_address,
            }),
            _ => Err(AppError::Validation(result)),
        }
    }
}

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}
