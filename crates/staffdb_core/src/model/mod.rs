//! Domain model for the employee table.
//!
//! # Responsibility
//! - Define the canonical record shape used by repository and service code.
//!
//! # Invariants
//! - Every row is identified by a stable `EmployeeId`.
//! - The model carries no behavior beyond equality and construction.

pub mod employee;
