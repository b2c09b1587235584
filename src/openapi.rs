//! OpenAPI document for the customer endpoints.

use crate::entity::{Customer, CustomerPayload};
use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::customer;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Customer API", description = "CRUD over customers"),
    paths(
        customer::list,
        customer::read,
        customer::create,
        customer::update,
        customer::delete
    ),
    components(schemas(Customer, CustomerPayload, ErrorBody, ErrorDetail)),
    tags((name = "customer", description = "Customer records"))
)]
pub struct ApiDoc;

/// Swagger UI at /swagger-ui, document at /api-docs/openapi.json.
pub fn openapi_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
