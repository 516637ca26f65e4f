//! Employee domain model.
//!
//! # Invariants
//! - `department_id` resolved to an existing department at registration time.
//! - `department_name` is captured at registration and never re-synced.
//! - `registration_date` is set once, at creation.

use crate::model::department::{Department, DepartmentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of an employee.
pub type EmployeeId = u64;

/// Registered employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Annual salary in dollars.
    pub salary: f64,
    pub department_id: DepartmentId,
    /// Department name as it was when the employee registered.
    pub department_name: String,
    pub registration_date: DateTime<Utc>,
}

impl Employee {
    /// Registers an employee against `department`, copying its current name.
    pub fn register(
        id: EmployeeId,
        name: impl Into<String>,
        salary: f64,
        department: &Department,
        registration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            department_id: department.id,
            department_name: department.name.clone(),
            registration_date,
        }
    }
}
