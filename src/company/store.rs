use super::pagination::page_range;
use super::types::{Company, CompanyId, Employee, EmployeeId};
use crate::error::{ApiError, Result};

use parking_lot::RwLock;

/// Ordered, name-unique collection of companies held in process memory.
///
/// Reads take the shared lock and return owned snapshots. Every mutation holds
/// the exclusive lock for its whole check-then-write step, so a failed call
/// never leaves a partial change behind.
#[derive(Debug, Default)]
pub struct CompanyStore {
    companies: RwLock<Vec<Company>>,
}

impl CompanyStore {
    pub fn new() -> Self {
        Self {
            companies: RwLock::new(Vec::new()),
        }
    }

    pub fn create(&self, name: &str) -> Result<Company> {
        let mut companies = self.companies.write();
        if companies.iter().any(|c| c.name == name) {
            tracing::warn!("Rejected duplicate company name '{}'", name);
            return Err(ApiError::DuplicateName(name.to_string()));
        }

        let company = Company::new(name);
        companies.push(company.clone());
        tracing::info!("Created company {} ('{}')", company.id, company.name);
        Ok(company)
    }

    pub fn get_all(&self) -> Vec<Company> {
        self.companies.read().clone()
    }

    pub fn get_by_id(&self, id: &CompanyId) -> Result<Company> {
        self.companies
            .read()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::CompanyNotFound(id.to_string()))
    }

    /// Returns one page of companies in insertion order.
    ///
    /// See [`page_range`] for the index convention and boundary rules.
    pub fn get_page(&self, page_index: i64, page_size: i64) -> Vec<Company> {
        let companies = self.companies.read();
        let range = page_range(page_index, page_size, companies.len());
        tracing::debug!(
            "Page {} (size {}) -> {:?} of {}",
            page_index,
            page_size,
            range,
            companies.len()
        );
        companies[range].to_vec()
    }

    pub fn update(&self, id: &CompanyId, new_name: &str) -> Result<Company> {
        let mut companies = self.companies.write();
        let company = companies
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| ApiError::CompanyNotFound(id.to_string()))?;

        company.name = new_name.to_string();
        Ok(company.clone())
    }

    pub fn delete(&self, id: &CompanyId) -> Result<()> {
        let mut companies = self.companies.write();
        let index = companies
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| ApiError::CompanyNotFound(id.to_string()))?;

        let removed = companies.remove(index);
        tracing::info!(
            "Deleted company {} ('{}') with {} employees",
            removed.id,
            removed.name,
            removed.employees.len()
        );
        Ok(())
    }

    /// Drops every company. Only used to isolate test scenarios.
    pub fn clear_all(&self) {
        let mut companies = self.companies.write();
        let count = companies.len();
        companies.clear();
        tracing::info!("Cleared {} companies", count);
    }

    pub fn len(&self) -> usize {
        self.companies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.read().is_empty()
    }

    // --- Employees ---

    pub fn add_employee(&self, company_id: &CompanyId, name: &str, salary: f64) -> Result<Employee> {
        self.with_company_mut(company_id, |company| {
            let employee = Employee::new(company.id.clone(), name, salary);
            company.employees.push(employee.clone());
            tracing::info!("Added employee {} to company {}", employee.id, company.id);
            Ok(employee)
        })
    }

    pub fn list_employees(&self, company_id: &CompanyId) -> Result<Vec<Employee>> {
        self.get_by_id(company_id).map(|c| c.employees)
    }

    pub fn get_employee(&self, company_id: &CompanyId, employee_id: &EmployeeId) -> Result<Employee> {
        let companies = self.companies.read();
        let company = companies
            .iter()
            .find(|c| &c.id == company_id)
            .ok_or_else(|| ApiError::CompanyNotFound(company_id.to_string()))?;

        company
            .employees
            .iter()
            .find(|e| &e.id == employee_id)
            .cloned()
            .ok_or_else(|| ApiError::EmployeeNotFound(employee_id.to_string()))
    }

    pub fn update_employee(
        &self,
        company_id: &CompanyId,
        employee_id: &EmployeeId,
        name: &str,
        salary: f64,
    ) -> Result<Employee> {
        self.with_company_mut(company_id, |company| {
            let index = company
                .employee_position(employee_id)
                .ok_or_else(|| ApiError::EmployeeNotFound(employee_id.to_string()))?;

            let employee = &mut company.employees[index];
            employee.name = name.to_string();
            employee.salary = salary;
            Ok(employee.clone())
        })
    }

    pub fn remove_employee(&self, company_id: &CompanyId, employee_id: &EmployeeId) -> Result<()> {
        self.with_company_mut(company_id, |company| {
            let index = company
                .employee_position(employee_id)
                .ok_or_else(|| ApiError::EmployeeNotFound(employee_id.to_string()))?;

            company.employees.remove(index);
            tracing::info!("Removed employee {} from company {}", employee_id, company.id);
            Ok(())
        })
    }

    fn with_company_mut<T>(
        &self,
        company_id: &CompanyId,
        f: impl FnOnce(&mut Company) -> Result<T>,
    ) -> Result<T> {
        let mut companies = self.companies.write();
        let company = companies
            .iter_mut()
            .find(|c| &c.id == company_id)
            .ok_or_else(|| ApiError::CompanyNotFound(company_id.to_string()))?;
        f(company)
    }
}
