//! Use-case services exposed to presentation layers.
//!
//! # Responsibility
//! - Wrap the record store behind async load/append entry points.
//! - Publish complete snapshots and loading status to observers.
//!
//! # See also
//! - `store::record_store` for validation and append semantics.

pub mod workforce_service;
