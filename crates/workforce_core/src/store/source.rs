//! Async dataset producers for `loadSnapshot`.
//!
//! # Responsibility
//! - Define the `SnapshotSource` contract the service loads from.
//! - Provide a JSON document source for datasets produced outside the crate.
//!
//! # Invariants
//! - A source returns either a complete snapshot or a `LoadError`; never a
//!   partial dataset.

use crate::store::snapshot::Snapshot;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Transient failure while producing or accepting a dataset.
///
/// `Clone` so the last failure can be published as part of observable status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not produce data (retry by loading again).
    Source(String),
    /// The source produced a document that could not be decoded.
    Parse(String),
    /// The decoded dataset violates record invariants.
    InvalidSnapshot(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(message) => write!(f, "snapshot source failed: {message}"),
            Self::Parse(message) => write!(f, "snapshot could not be parsed: {message}"),
            Self::InvalidSnapshot(message) => write!(f, "snapshot is invalid: {message}"),
        }
    }
}

impl Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

/// Producer of complete datasets.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Produces one complete dataset.
    async fn fetch(&self) -> Result<Snapshot, LoadError>;

    /// Short name used in log events.
    fn source_name(&self) -> &str;
}

/// Source decoding a JSON document of the shape
/// `{"departments": [...], "employees": [...]}` with camelCase fields.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    name: String,
    document: String,
}

impl JsonSnapshotSource {
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
        }
    }
}

#[async_trait]
impl SnapshotSource for JsonSnapshotSource {
    async fn fetch(&self) -> Result<Snapshot, LoadError> {
        Ok(serde_json::from_str(&self.document)?)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonSnapshotSource, LoadError, SnapshotSource};

    #[tokio::test]
    async fn json_source_decodes_camel_case_records() {
        let source = JsonSnapshotSource::new(
            "inline",
            r#"{
                "departments": [
                    {"id": 1, "name": "Engineering", "createdAt": "2024-01-15T10:30:00Z"}
                ],
                "employees": [
                    {
                        "id": 1,
                        "name": "Sarah Johnson",
                        "salary": 85000,
                        "departmentId": 1,
                        "departmentName": "Engineering",
                        "registrationDate": "2024-01-15T10:30:00Z"
                    }
                ]
            }"#,
        );

        let snapshot = source.fetch().await.unwrap();
        assert_eq!(snapshot.departments().len(), 1);
        assert_eq!(snapshot.employees()[0].department_name, "Engineering");
        assert_eq!(snapshot.employees()[0].salary, 85_000.0);
    }

    #[tokio::test]
    async fn json_source_reports_parse_errors() {
        let source = JsonSnapshotSource::new("broken", "{ not json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
