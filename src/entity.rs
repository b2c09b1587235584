//! Customer record types: persisted row, unvalidated request body, validated write.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted customer. `id` is assigned by the store on insert and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Age")]
    pub age: i32,
    #[serde(alias = "EmailAddress")]
    pub email_address: String,
}

/// Body of POST and PUT requests. Any `id` sent by the client is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Age")]
    pub age: i32,
    #[serde(default, alias = "EmailAddress")]
    pub email_address: Option<String>,
}

/// Field values that passed validation. Repository writes accept only this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i32,
    pub email_address: String,
}

impl NewCustomer {
    pub fn with_id(self, id: i32) -> Customer {
        Customer {
            id,
            name: self.name,
            age: self.age,
            email_address: self.email_address,
        }
    }
}
