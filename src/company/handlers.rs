use super::pagination::PageQuery;
use super::protocol::{CompanyRequest, EmployeeRequest, HealthResponse};
use super::store::CompanyStore;
use super::types::{Company, CompanyId, Employee, EmployeeId};
use crate::error::{ApiError, Result};

use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

pub async fn handle_create_company(
    Extension(store): Extension<Arc<CompanyStore>>,
    payload: std::result::Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Company>)> {
    let req = parse_body(payload)?;
    req.validate()?;

    let company = store.create(&req.name)?;
    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn handle_list_companies(
    Extension(store): Extension<Arc<CompanyStore>>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<Company>>> {
    let Query(page) = query.map_err(|e| {
        tracing::warn!("Rejected page query: {}", e);
        ApiError::Validation(e.body_text())
    })?;

    if page.is_unpaged() {
        return Ok(Json(store.get_all()));
    }

    Ok(Json(store.get_page(
        page.page_index.unwrap_or(0),
        page.page_size.unwrap_or(0),
    )))
}

pub async fn handle_clear_companies(Extension(store): Extension<Arc<CompanyStore>>) -> StatusCode {
    store.clear_all();
    StatusCode::NO_CONTENT
}

pub async fn handle_get_company(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path(company_id): Path<String>,
) -> Result<Json<Company>> {
    let company = store.get_by_id(&CompanyId(company_id))?;
    tracing::debug!("Fetched company {}", company.id);
    Ok(Json(company))
}

pub async fn handle_update_company(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path(company_id): Path<String>,
    payload: std::result::Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<Json<Company>> {
    let req = parse_body(payload)?;
    req.validate()?;

    let company = store.update(&CompanyId(company_id), &req.name)?;
    Ok(Json(company))
}

pub async fn handle_delete_company(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path(company_id): Path<String>,
) -> Result<StatusCode> {
    store.delete(&CompanyId(company_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_add_employee(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path(company_id): Path<String>,
    payload: std::result::Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>)> {
    let req = parse_body(payload)?;
    req.validate()?;

    let employee = store.add_employee(&CompanyId(company_id), &req.name, req.salary)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn handle_list_employees(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path(company_id): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    let employees = store.list_employees(&CompanyId(company_id))?;
    Ok(Json(employees))
}

pub async fn handle_get_employee(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path((company_id, employee_id)): Path<(String, String)>,
) -> Result<Json<Employee>> {
    let employee = store.get_employee(&CompanyId(company_id), &EmployeeId(employee_id))?;
    Ok(Json(employee))
}

pub async fn handle_update_employee(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path((company_id, employee_id)): Path<(String, String)>,
    payload: std::result::Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>> {
    let req = parse_body(payload)?;
    req.validate()?;

    let employee = store.update_employee(
        &CompanyId(company_id),
        &EmployeeId(employee_id),
        &req.name,
        req.salary,
    )?;
    Ok(Json(employee))
}

pub async fn handle_remove_employee(
    Extension(store): Extension<Arc<CompanyStore>>,
    Path((company_id, employee_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    store.remove_employee(&CompanyId(company_id), &EmployeeId(employee_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_health(Extension(store): Extension<Arc<CompanyStore>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        companies: store.len(),
    })
}

// Missing fields and malformed JSON both surface as 400 instead of axum's 422.
fn parse_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(e) => {
            tracing::warn!("Rejected request body: {}", e);
            Err(ApiError::Validation(e.body_text()))
        }
    }
}
