use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a company.
///
/// Wrapper around a UUID v4 string. Generated once at creation and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CompanyId(pub String);

impl CompanyId {
    /// Generates a new random UUID v4-based CompanyId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompanyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Unique identifier for an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A named company and the employees it owns.
///
/// The employee sequence keeps insertion order; it lives and dies with the company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Company {
    /// Creates a company with a fresh id and no employees.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CompanyId::new(),
            name: name.into(),
            employees: Vec::new(),
        }
    }

    pub(crate) fn employee_position(&self, employee_id: &EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| &e.id == employee_id)
    }
}

/// An employee record.
///
/// `company_id` is a back-reference only; ownership runs from `Company::employees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub salary: f64,
    pub company_id: CompanyId,
}

impl Employee {
    pub fn new(company_id: CompanyId, name: impl Into<String>, salary: f64) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            salary,
            company_id,
        }
    }
}
