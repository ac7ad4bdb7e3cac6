//! Argument passing: by value, by reference, and returning from a factory.

use std::sync::Arc;

use crate::company::Company;
use crate::department::Department;
use crate::record::EmployeeRecord;

/// Takes ownership of `record` and reports its name.
///
/// Callers that want to keep their record pass a clone; that clone is
/// destroyed when this function returns.
pub fn print_by_value(record: EmployeeRecord) -> String {
    format!("[Passed by Value] {}", record.name())
}

/// Borrows `record`; nothing is constructed or destroyed.
pub fn print_by_reference(record: &EmployeeRecord) -> String {
    format!("[Passed by Reference]\n{record}")
}

/// Builds a record inside the function and moves it out to the caller.
pub fn create_new_employee(
    company: &Arc<Company>,
    name: impl Into<String>,
    employee_id: u32,
    salary: f64,
    department: impl Into<Department>,
) -> EmployeeRecord {
    EmployeeRecord::new_in(company, name, employee_id, salary, department)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_by_value_restores_live_count_after_return() {
        let company = Company::new("TestCo");
        let record = EmployeeRecord::new_in(&company, "Ahmed Khan", 101, 50000.0, "Engineering");
        let before = company.live_count();

        let line = print_by_value(record.clone());

        assert_eq!(line, "[Passed by Value] Ahmed Khan");
        assert_eq!(company.live_count(), before);
        assert_eq!(record.name(), "Ahmed Khan");
    }

    #[test]
    fn pass_by_reference_constructs_nothing() {
        let company = Company::new("TestCo");
        let record = EmployeeRecord::new_in(&company, "Sara Ali", 102, 55000.0, "Marketing");

        let text = print_by_reference(&record);

        assert!(text.starts_with("[Passed by Reference]\n--- Employee Details ---"));
        assert!(text.contains("Name: Sara Ali"));
        assert_eq!(company.live_count(), 1);
    }

    #[test]
    fn factory_result_counts_exactly_once() {
        let company = Company::new("TestCo");

        let record = create_new_employee(&company, "Ali Raza", 104, 52000.0, "HR");

        assert_eq!(company.live_count(), 1);
        assert_eq!(record.name(), "Ali Raza");
        assert_eq!(record.department().as_str(), "HR");

        drop(record);
        assert_eq!(company.live_count(), 0);
    }
}
