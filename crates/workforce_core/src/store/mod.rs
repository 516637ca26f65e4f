//! In-memory record store and snapshot sources.
//!
//! # Responsibility
//! - Own all `Department`/`Employee` records behind immutable snapshots.
//! - Validate then append new records; replace the whole dataset on load.
//! - Define the async `SnapshotSource` contract for dataset producers.
//!
//! # Invariants
//! - Readers only ever hold complete `Arc<Snapshot>` values.
//! - A failed append or load leaves the current snapshot untouched.

pub mod record_store;
pub mod seed;
pub mod snapshot;
pub mod source;
