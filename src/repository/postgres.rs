//! PostgreSQL customer repository. Identifiers come from startup config only; values are bound.

use super::CustomerRepository;
use crate::entity::{Customer, NewCustomer};
use crate::error::AppError;
use crate::store::qualified_table;
use async_trait::async_trait;
use sqlx::PgPool;

pub const CUSTOMERS_TABLE: &str = "customers";

const COLUMNS: &str = "\"id\", \"name\", \"age\", \"email_address\"";

#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
    table: String,
}

impl PgCustomerRepository {
    /// `schema` must already be validated as a plain identifier (see `ServiceConfig`).
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            table: qualified_table(schema, CUSTOMERS_TABLE),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn add(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO {} (\"name\", \"age\", \"email_address\") VALUES ($1, $2, $3) RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&customer.name)
            .bind(customer.age)
            .bind(&customer.email_address)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY \"id\"", COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE \"id\" = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::customer_not_found(id))
    }

    async fn update(&self, id: i32, patch: NewCustomer) -> Result<Customer, AppError> {
        let sql = format!(
            "UPDATE {} SET \"name\" = $2, \"age\" = $3, \"email_address\" = $4 WHERE \"id\" = $1 RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(patch.age)
            .bind(&patch.email_address)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::customer_not_found(id))
    }

    async fn remove(&self, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE \"id\" = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::customer_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
