//! Built-in demo dataset.
//!
//! Six departments and fifteen employees, shipped as an embedded JSON
//! document so the dashboard has data before any external source exists.

use crate::store::snapshot::Snapshot;
use crate::store::source::{LoadError, SnapshotSource};
use async_trait::async_trait;

const SEED_DOCUMENT: &str = include_str!("seed.json");
const SEED_SOURCE_NAME: &str = "seed";

/// Decodes the embedded seed dataset.
pub fn seed_snapshot() -> Result<Snapshot, LoadError> {
    Ok(serde_json::from_str(SEED_DOCUMENT)?)
}

/// `SnapshotSource` serving the embedded seed dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSnapshotSource;

#[async_trait]
impl SnapshotSource for SeedSnapshotSource {
    async fn fetch(&self) -> Result<Snapshot, LoadError> {
        seed_snapshot()
    }

    fn source_name(&self) -> &str {
        SEED_SOURCE_NAME
    }
}
