//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Every operation is a single parameterized statement; no retry, no
//!   rollback logic lives here.
//! - Read paths reject malformed persisted state instead of masking it.

pub mod employee_repo;
