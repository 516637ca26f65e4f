//! Department domain model.
//!
//! # Invariants
//! - `id` is unique and assigned monotonically by the record store.
//! - `name` is unique under case-insensitive comparison.
//! - Departments are append-only: no rename, no delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of a department.
pub type DepartmentId = u64;

/// Organizational unit that employees register against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    /// Trimmed display name, 2..=50 chars under default rules.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Department {
    /// Creates a department record without validating it.
    ///
    /// Validation belongs to the record store, which knows the existing names.
    pub fn new(id: DepartmentId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }

    /// Case-insensitive name comparison used for uniqueness checks.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
