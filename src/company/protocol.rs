//! Company API Protocol
//!
//! Route templates and request/response bodies for the public HTTP API.
//! Responses reuse the domain types (`Company`, `Employee`) directly; only the
//! inbound payloads get dedicated structs so they can be validated before
//! they reach the store.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection of companies (create, list, clear).
pub const ENDPOINT_COMPANIES: &str = "/api/companies";
/// A single company.
pub const ENDPOINT_COMPANY: &str = "/api/companies/:company_id";
/// Employees of one company.
pub const ENDPOINT_EMPLOYEES: &str = "/api/companies/:company_id/employees";
/// A single employee of one company.
pub const ENDPOINT_EMPLOYEE: &str = "/api/companies/:company_id/employees/:employee_id";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Data Transfer Objects ---

/// Body for creating or renaming a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRequest {
    pub name: String,
}

impl CompanyRequest {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

/// Body for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    pub name: String,
    pub salary: f64,
}

impl EmployeeRequest {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(ApiError::Validation(format!(
                "salary must be a non-negative number, got {}",
                self.salary
            )));
        }
        Ok(())
    }
}

/// Response for the liveness probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub companies: usize,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}
