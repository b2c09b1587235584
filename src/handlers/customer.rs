//! Customer handlers: list, read, create, update, delete.

use crate::entity::{Customer, CustomerPayload};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn body_to_payload(body: Result<Json<Value>, JsonRejection>) -> Result<CustomerPayload, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(format!("invalid customer body: {}", e)))
}

#[utoipa::path(
    get,
    path = "/customer",
    tag = "customer",
    responses((status = 200, description = "All customers", body = [Customer]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let rows = state.customers.get_all().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = Customer),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No customer with this id", body = ErrorBody)
    )
)]
pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Json<Customer>, AppError> {
    let id = parse_id(&id_str)?;
    tracing::info!(id, "Method call GetById");
    let row = state.customers.get_by_id(id).await?;
    Ok(Json(row))
}

#[utoipa::path(
    post,
    path = "/customer",
    tag = "customer",
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Stored customer with its assigned id", body = Customer),
        (status = 400, description = "Validation failed", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Customer>, AppError> {
    let payload = body_to_payload(body)?;
    let customer = state.validator.check(payload)?;
    let row = state.customers.add(customer).await?;
    tracing::info!(id = row.id, "Customer Added Successfully");
    Ok(Json(row))
}

#[utoipa::path(
    put,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Updated customer", body = Customer),
        (status = 400, description = "Validation failed or malformed id", body = ErrorBody),
        (status = 404, description = "No customer with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Customer>, AppError> {
    let id = parse_id(&id_str)?;
    let payload = body_to_payload(body)?;
    let patch = state.validator.check(payload)?;
    let row = state.customers.update(id, patch).await?;
    tracing::info!(id, "Customer Updated Successfully");
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer removed"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No customer with this id", body = ErrorBody)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    state.customers.remove(id).await?;
    tracing::info!(id, "Customer Deleted Successfully");
    Ok(StatusCode::OK)
}
