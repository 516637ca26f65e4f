//! Workforce domain model.
//!
//! # Responsibility
//! - Define the canonical `Department` and `Employee` records.
//! - Own field-level validation rules and the `ValidationError` field map.
//!
//! # Invariants
//! - Records are immutable after creation; the store only appends.
//! - `Employee::department_name` is a point-in-time copy, never a live reference.

pub mod department;
pub mod employee;
pub mod validation;
