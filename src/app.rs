use crate::company::handlers::*;
use crate::company::protocol::*;
use crate::company::store::CompanyStore;
use crate::logging::request_tracing;

use axum::{
    Router,
    extract::Extension,
    middleware,
    routing::get,
};
use std::sync::Arc;

/// Builds the HTTP router over an existing store handle.
pub fn build_router(store: Arc<CompanyStore>) -> Router {
    Router::new()
        .route(
            ENDPOINT_COMPANIES,
            get(handle_list_companies)
                .post(handle_create_company)
                .delete(handle_clear_companies),
        )
        .route(
            ENDPOINT_COMPANY,
            get(handle_get_company)
                .put(handle_update_company)
                .delete(handle_delete_company),
        )
        .route(
            ENDPOINT_EMPLOYEES,
            get(handle_list_employees).post(handle_add_employee),
        )
        .route(
            ENDPOINT_EMPLOYEE,
            get(handle_get_employee)
                .put(handle_update_employee)
                .delete(handle_remove_employee),
        )
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(middleware::from_fn(request_tracing))
        .layer(Extension(store))
}
