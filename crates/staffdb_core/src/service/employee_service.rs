//! Employee use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The service layer remains storage-agnostic.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};
use chrono::NaiveDate;

/// Use-case service wrapper for employee CRUD operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gets one employee by id. `Ok(None)` when no row matches.
    pub fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.repo.find_by_id(id)
    }

    /// Lists employees whose salary falls in `[low, high]`, both bounds
    /// inclusive. Row order is unspecified.
    pub fn find_by_salary_range(&self, low: i64, high: i64) -> RepoResult<Vec<Employee>> {
        self.repo.find_by_salary_range(low, high)
    }

    /// Inserts one employee row.
    pub fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        self.repo.insert(employee)
    }

    /// Builds an employee from scalar input and inserts it.
    ///
    /// # Contract
    /// - `job_name = None` when no title is supplied.
    /// - Returns the caller-assigned id on success.
    pub fn hire(
        &self,
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        entrance_date: NaiveDate,
        job_name: Option<String>,
        salary: i64,
    ) -> RepoResult<EmployeeId> {
        let mut employee = Employee::new(id, name, department, entrance_date, salary);
        employee.job_name = job_name;
        self.repo.insert(&employee)
    }

    /// Deletes one employee by id. Deleting a missing id is a no-op.
    pub fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }

    /// Applies a department-wide salary adjustment and returns how many
    /// rows changed.
    pub fn update_salary_by_department(
        &self,
        department: &str,
        delta: i64,
    ) -> RepoResult<usize> {
        self.repo.update_salary_by_department(department, delta)
    }
}
