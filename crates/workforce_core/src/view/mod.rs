//! Per-table view state.
//!
//! # Responsibility
//! - Hold search/sort/page/category parameters for one table instance.
//! - Re-run the query pipeline after every parameter or data change.
//!
//! # Invariants
//! - State is owned per controller; there is no process-wide view state.
//! - The exposed page is always derived from the current rows and state.

pub mod table;
