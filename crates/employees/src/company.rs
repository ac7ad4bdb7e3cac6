//! Company context: the shared name and live-count every record reports to.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use serde::Serialize;

use forgehr_core::{DomainError, DomainResult};

/// Name of the process-wide default company.
pub const DEFAULT_COMPANY_NAME: &str = "TechSolutions";

static GLOBAL: Lazy<Arc<Company>> = Lazy::new(|| Company::new(DEFAULT_COMPANY_NAME));

/// Shared, class-level state for employee records.
///
/// Invariant: `live_count()` equals the number of live records registered
/// with this company. Only record construction, cloning and dropping move the
/// counter; there is no way to reset it.
#[derive(Debug)]
pub struct Company {
    name: String,
    live: AtomicUsize,
}

impl Company {
    /// Create an isolated company with no employees.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            live: AtomicUsize::new(0),
        })
    }

    /// The process-wide default company, created on first use.
    pub fn global() -> &'static Arc<Company> {
        &GLOBAL
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn live_count(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn info(&self) -> CompanyInfo {
        CompanyInfo {
            company: self.name.clone(),
            employee_count: self.live_count(),
        }
    }

    /// Returns the live-count after registration.
    pub(crate) fn register(&self) -> usize {
        self.live.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns the live-count after release, or an invariant violation when
    /// there is nothing left to release. The count is left at zero.
    pub(crate) fn try_release(&self) -> DomainResult<usize> {
        self.live
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .map(|previous| previous - 1)
            .map_err(|_| {
                DomainError::invariant(format!("live count underflow in company {}", self.name))
            })
    }

    /// Returns the live-count after release. Never goes below zero.
    pub(crate) fn release(&self) -> usize {
        self.try_release().unwrap_or_else(|err| {
            tracing::error!(company = %self.name, error = %err, "release failed");
            0
        })
    }
}

/// Point-in-time read of a company's shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub company: String,
    pub employee_count: usize,
}

impl core::fmt::Display for CompanyInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "=== Company Information ===")?;
        writeln!(f, "Company: {}", self.company)?;
        write!(f, "Total Employees: {}", self.employee_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_company_starts_empty() {
        let company = Company::new("Acme");
        assert_eq!(company.name(), "Acme");
        assert_eq!(company.live_count(), 0);
    }

    #[test]
    fn register_and_release_move_by_exactly_one() {
        let company = Company::new("Acme");
        assert_eq!(company.register(), 1);
        assert_eq!(company.register(), 2);
        assert_eq!(company.release(), 1);
        assert_eq!(company.live_count(), 1);
    }

    #[test]
    fn release_never_goes_below_zero() {
        let company = Company::new("Acme");
        assert_eq!(company.release(), 0);
        assert_eq!(company.live_count(), 0);
    }

    #[test]
    fn try_release_on_empty_company_is_an_invariant_violation() {
        let company = Company::new("Acme");

        let err = company.try_release().unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("Acme")),
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
        assert_eq!(company.live_count(), 0);

        company.register();
        assert_eq!(company.try_release(), Ok(0));
    }

    #[test]
    fn global_company_is_a_single_instance() {
        assert!(Arc::ptr_eq(Company::global(), Company::global()));
        assert_eq!(Company::global().name(), DEFAULT_COMPANY_NAME);
    }

    #[test]
    fn info_renders_name_and_count() {
        let company = Company::new("Acme");
        company.register();

        let info = company.info();
        assert_eq!(
            info,
            CompanyInfo {
                company: "Acme".to_string(),
                employee_count: 1,
            }
        );
        assert_eq!(
            info.to_string(),
            "=== Company Information ===\nCompany: Acme\nTotal Employees: 1"
        );
    }
}
