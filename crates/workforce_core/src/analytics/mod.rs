//! Aggregation engine over record snapshots.
//!
//! # Responsibility
//! - Derive department averages, highest-paid employees and payroll totals.
//! - Derive the supplemental department/employee statistics used by the
//!   management views.
//!
//! # Invariants
//! - Every function is pure: same `(employees, departments)` input, same output.
//! - Output order follows the input department order.
//! - Empty departments never divide by zero; they report zeros / `None`.

pub mod engine;
pub mod stats;
