//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Provide stable entry points for application callers.
//! - Keep the service layer storage-agnostic via the repository trait.

pub mod employee_service;
