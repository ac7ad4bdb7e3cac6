//! Employees domain module.
//!
//! An [`EmployeeRecord`] is a plain value: cloning it deep-copies the name,
//! dropping it releases its storage, and every construction, copy and drop is
//! accounted for in the [`Company`] it belongs to.

pub mod company;
pub mod demo;
pub mod department;
pub mod passing;
pub mod record;

pub use company::{Company, CompanyInfo, DEFAULT_COMPANY_NAME};
pub use department::Department;
pub use passing::{create_new_employee, print_by_reference, print_by_value};
pub use record::{EmployeeRecord, EmployeeSnapshot};
