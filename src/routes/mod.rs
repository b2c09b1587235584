//! Router assembly: common probes, customer CRUD, OpenAPI document.

mod common;
mod customer;
pub use common::common_routes;
pub use customer::customer_routes;

use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router.
pub fn app_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state))
        .merge(openapi_routes())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
