//! Employee domain record.
//!
//! # Responsibility
//! - Mirror one row of the `EMPLOYEE` table as a plain value type.
//!
//! # Invariants
//! - `employee_id` is the primary key and never changes once persisted.
//! - `job_name = None` means the column is NULL; it is distinct from `""`.
//! - Two records are equal iff all six fields are equal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier for an employee row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// One row of the `EMPLOYEE` table.
///
/// Pure data holder: no validation is performed here. Salary is expected
/// to be non-negative but the model does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary key, assigned by the caller.
    pub employee_id: EmployeeId,
    /// Display name.
    pub employee_name: String,
    /// Free-form department label, matched exactly by bulk updates.
    pub department_name: String,
    /// Date of joining. Calendar date only, no time-of-day or timezone.
    pub entrance_date: NaiveDate,
    /// Optional job title. NULL in storage when absent.
    pub job_name: Option<String>,
    /// Monthly salary in whole currency units.
    pub salary: i64,
}

impl Employee {
    /// Creates a record with the five required fields; `job_name` starts
    /// as `None`.
    pub fn new(
        employee_id: EmployeeId,
        employee_name: impl Into<String>,
        department_name: impl Into<String>,
        entrance_date: NaiveDate,
        salary: i64,
    ) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.into(),
            department_name: department_name.into(),
            entrance_date,
            job_name: None,
            salary,
        }
    }

    /// Sets the optional job title, consuming and returning `self` so it
    /// chains onto `new`.
    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }
}
