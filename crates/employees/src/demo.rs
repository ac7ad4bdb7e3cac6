//! The console walkthrough run by the `forgehr-demo` binary.

use std::io::{self, Write};
use std::sync::Arc;

use crate::company::Company;
use crate::passing::{create_new_employee, print_by_reference, print_by_value};
use crate::record::EmployeeRecord;

const RULE: &str = "======================================";

fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "   {title}")?;
    writeln!(out, "{RULE}")
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")
}

fn details(out: &mut impl Write, record: &EmployeeRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{record}")
}

fn company_info(out: &mut impl Write, company: &Company) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", company.info())
}

/// Write the full walkthrough to `out`, registering every record with
/// `company`.
///
/// Every record created here is destroyed before this returns, so the
/// company's live-count ends where it started.
pub fn run<W: Write>(company: &Arc<Company>, out: &mut W) -> io::Result<()> {
    tracing::info!(company = %company.name(), "demo started");

    banner(out, &format!("{} EMPLOYEE SYSTEM", company.name().to_uppercase()))?;
    writeln!(out)?;

    company_info(out, company)?;

    section(out, "Creating Employees")?;
    let emp1 = EmployeeRecord::new_in(company, "Ahmed Khan", 101, 50000.0, "Engineering");
    let emp2 = EmployeeRecord::new_in(company, "Sara Ali", 102, 55000.0, "Marketing");
    details(out, &emp1)?;
    details(out, &emp2)?;

    section(out, "Dynamic Allocation")?;
    let emp3 = Box::new(EmployeeRecord::new_in(company, "Fatima Hassan", 103, 60000.0, "Finance"));
    details(out, &emp3)?;

    section(out, "This Pointer Demo")?;
    let borrowed = &emp1;
    writeln!(out, "Address of emp1: {:p}", &emp1)?;
    writeln!(out, "This pointer: {:p}", borrowed.as_ptr())?;
    writeln!(out, "Same object: {}", core::ptr::eq(borrowed.as_ptr(), &emp1))?;

    section(out, "Passing Objects")?;
    writeln!(out)?;
    writeln!(out, "{}", print_by_value(emp1.clone()))?;
    writeln!(out)?;
    writeln!(out, "{}", print_by_reference(&emp2))?;

    section(out, "Returning Object")?;
    let emp4 = create_new_employee(company, "Ali Raza", 104, 52000.0, "HR");
    details(out, &emp4)?;

    writeln!(out)?;
    banner(out, "DEEP COPY DEMONSTRATION")?;

    let mut original = EmployeeRecord::new_in(company, "Zain Malik", 105, 58000.0, "IT");
    writeln!(out)?;
    writeln!(out, "Original Employee:")?;
    details(out, &original)?;

    let deep_copy = original.clone();
    writeln!(out)?;
    writeln!(out, "Deep Copy Created:")?;
    details(out, &deep_copy)?;

    section(out, "Modifying Original")?;
    original.update_name("Zain Malik (Senior)");
    original.update_salary(65000.0);

    writeln!(out)?;
    writeln!(out, "After Modification:")?;
    writeln!(out)?;
    writeln!(out, "Original (Modified):")?;
    details(out, &original)?;

    writeln!(out)?;
    writeln!(out, "Deep Copy (Unchanged):")?;
    details(out, &deep_copy)?;

    writeln!(out)?;
    writeln!(out, "** Deep copy has independent memory **")?;

    section(out, "Adding New Employee")?;
    let emp5 = EmployeeRecord::new_in(company, "Ayesha Iqbal", 106, 54000.0, "Operations");
    company_info(out, company)?;

    section(out, "Const Object")?;
    let const_emp = EmployeeRecord::new_in(company, "Hassan Ahmed", 107, 56000.0, "QA");
    details(out, &const_emp)?;

    drop(emp3);

    section(out, "Final Statistics")?;
    company_info(out, company)?;

    writeln!(out)?;
    banner(out, "PROGRAM COMPLETED")?;
    writeln!(out)?;

    drop((emp1, emp2, emp4, original, deep_copy, emp5, const_emp));
    tracing::info!(live = company.live_count(), "demo finished");
    Ok(())
}
