//! The employee record value type.

use std::sync::Arc;

use serde::Serialize;

use forgehr_core::{DomainError, DomainResult, EmployeeId, Entity};

use crate::company::{Company, CompanyInfo};
use crate::department::Department;

/// A single employee.
///
/// - `name` is owned storage; a clone gets its own copy.
/// - `department` is fixed at construction and has no mutator.
/// - Every live record is counted by the [`Company`] it was registered with:
///   construction and [`Clone::clone`] increment the count, [`Drop`]
///   decrements it.
#[derive(Debug)]
pub struct EmployeeRecord {
    name: String,
    employee_id: EmployeeId,
    salary: f64,
    department: Department,
    company: Arc<Company>,
}

impl EmployeeRecord {
    /// Construct a record registered with the process-wide default company.
    pub fn new(
        name: impl Into<String>,
        employee_id: u32,
        salary: f64,
        department: impl Into<Department>,
    ) -> Self {
        Self::new_in(Company::global(), name, employee_id, salary, department)
    }

    /// Construct a record registered with `company`.
    ///
    /// Inputs are taken as given; use [`EmployeeRecord::try_new_in`] for
    /// validated construction.
    pub fn new_in(
        company: &Arc<Company>,
        name: impl Into<String>,
        employee_id: u32,
        salary: f64,
        department: impl Into<Department>,
    ) -> Self {
        let record = Self {
            name: name.into(),
            employee_id: EmployeeId::new(employee_id),
            salary,
            department: department.into(),
            company: Arc::clone(company),
        };
        let live = record.company.register();
        tracing::info!(
            name = %record.name,
            employee_id = %record.employee_id,
            live,
            "employee created"
        );
        record
    }

    /// Validated construction.
    ///
    /// Rejects a blank name or department and a negative or non-finite
    /// salary. Nothing is registered with `company` when validation fails.
    pub fn try_new_in(
        company: &Arc<Company>,
        name: impl Into<String>,
        employee_id: u32,
        salary: f64,
        department: impl Into<Department>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let department = department.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if department.is_blank() {
            return Err(DomainError::validation("department cannot be empty"));
        }
        validate_salary(salary)?;

        Ok(Self::new_in(company, name, employee_id, salary, department))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn department(&self) -> &Department {
        &self.department
    }

    pub fn company(&self) -> &Arc<Company> {
        &self.company
    }

    /// Address of this record, for showing that a borrow refers to the same
    /// object as the binding it came from.
    pub fn as_ptr(&self) -> *const Self {
        self
    }

    pub fn update_salary(&mut self, new_salary: f64) {
        tracing::debug!(
            employee_id = %self.employee_id,
            old = self.salary,
            new = new_salary,
            "salary updated"
        );
        self.salary = new_salary;
    }

    pub fn update_name(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        tracing::debug!(
            employee_id = %self.employee_id,
            old = %self.name,
            new = %new_name,
            "name updated"
        );
        self.name = new_name;
    }

    pub fn set_employee_id(&mut self, employee_id: u32) {
        self.employee_id = EmployeeId::new(employee_id);
    }

    /// Read-only rendering of every field plus the company name.
    pub fn display(&self) -> String {
        self.to_string()
    }

    pub fn snapshot(&self) -> EmployeeSnapshot {
        EmployeeSnapshot {
            name: self.name.clone(),
            employee_id: self.employee_id,
            salary: self.salary,
            department: self.department.clone(),
            company: self.company.name().to_string(),
        }
    }

    /// Name and live-count of the default company. Needs no instance.
    ///
    /// Delegates to [`Company::info`] on [`Company::global`], so the counting
    /// behavior is the same as for any isolated company.
    pub fn company_info() -> CompanyInfo {
        Company::global().info()
    }

    /// Live-count of the default company.
    pub fn total_employees() -> usize {
        Company::global().live_count()
    }
}

fn validate_salary(salary: f64) -> DomainResult<()> {
    if !salary.is_finite() {
        return Err(DomainError::validation("salary must be a finite number"));
    }
    if salary < 0.0 {
        return Err(DomainError::validation("salary cannot be negative"));
    }
    Ok(())
}

impl Clone for EmployeeRecord {
    /// Deep copy: the name is duplicated into fresh storage and the copy is
    /// registered with the same company as the source.
    fn clone(&self) -> Self {
        let copy = Self {
            name: self.name.clone(),
            employee_id: self.employee_id,
            salary: self.salary,
            department: self.department.clone(),
            company: Arc::clone(&self.company),
        };
        let live = copy.company.register();
        tracing::info!(
            name = %self.name,
            employee_id = %self.employee_id,
            live,
            "creating deep copy"
        );
        copy
    }
}

impl Drop for EmployeeRecord {
    fn drop(&mut self) {
        let live = self.company.release();
        tracing::info!(
            name = %self.name,
            employee_id = %self.employee_id,
            live,
            "destroying employee"
        );
    }
}

impl Entity for EmployeeRecord {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.employee_id
    }
}

impl core::fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Employee Details ---")?;
        writeln!(f, "Company: {}", self.company.name())?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.employee_id)?;
        writeln!(f, "Department: {}", self.department)?;
        write!(f, "Salary: ${}", self.salary)
    }
}

/// Serializable, detached view of a record.
///
/// Holding a snapshot does not count as a live employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSnapshot {
    pub name: String,
    pub employee_id: EmployeeId,
    pub salary: f64,
    pub department: Department,
    pub company: String,
}
