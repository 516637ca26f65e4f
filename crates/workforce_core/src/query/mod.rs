//! Generic filter -> sort -> paginate pipeline for table views.
//!
//! # Responsibility
//! - Expose record columns through the `Tabular` trait.
//! - Run case-insensitive search, category filtering, type-aware sorting
//!   and 1-based pagination over any record collection.
//!
//! # Invariants
//! - The pipeline never mutates its input collection.
//! - Descending order is the exact reverse of the stable ascending order.
//! - Out-of-range pages are empty; the pipeline never clamps.

pub mod columns;
pub mod field;
pub mod pipeline;
