//! Append-only in-memory record store.
//!
//! # Responsibility
//! - Validate registration requests against the current snapshot.
//! - Assign ids and append records copy-on-write.
//! - Replace the dataset wholesale with a validated snapshot.
//!
//! # Invariants
//! - Write paths validate before any mutation; a rejected request leaves the
//!   published snapshot byte-for-byte unchanged.
//! - Snapshots already handed out are never mutated.

use crate::model::department::{Department, DepartmentId};
use crate::model::employee::Employee;
use crate::model::validation::{normalize_name, ValidationError, ValidationRules};
use crate::store::snapshot::Snapshot;
use crate::store::source::LoadError;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;

/// Exclusive owner of all department and employee records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    snapshot: Arc<Snapshot>,
    rules: ValidationRules,
}

impl RecordStore {
    /// Creates an empty store enforcing `rules` on appends.
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            snapshot: Arc::new(Snapshot::default()),
            rules,
        }
    }

    /// Returns the current complete snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Replaces every record with `snapshot` after checking its invariants.
    ///
    /// # Errors
    /// - `LoadError::InvalidSnapshot` when the dataset is inconsistent; the
    ///   previous snapshot stays in place.
    pub fn replace(&mut self, snapshot: Snapshot) -> Result<Arc<Snapshot>, LoadError> {
        snapshot.validate()?;
        self.snapshot = Arc::new(snapshot);
        info!(
            "event=snapshot_replace module=store status=ok departments={} employees={}",
            self.snapshot.departments().len(),
            self.snapshot.employees().len()
        );
        Ok(self.snapshot())
    }

    /// Validates and appends a new department.
    ///
    /// The name is normalized (trimmed, inner whitespace collapsed) first.
    pub fn append_department(
        &mut self,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Department, ValidationError> {
        let name = normalize_name(name);
        if let Err(err) = self
            .rules
            .check_department_name(&name, self.snapshot.departments())
        {
            warn!(
                "event=department_append module=store status=rejected fields={}",
                err.fields().len()
            );
            return Err(err);
        }

        let department = Department::new(self.snapshot.next_department_id(), name, created_at);
        Arc::make_mut(&mut self.snapshot).push_department(department.clone());
        info!(
            "event=department_append module=store status=ok department_id={}",
            department.id
        );
        Ok(department)
    }

    /// Validates and appends a new employee registered against `department_id`.
    ///
    /// The employee captures the department's current name.
    pub fn append_employee(
        &mut self,
        name: &str,
        salary: f64,
        department_id: DepartmentId,
        registered_at: DateTime<Utc>,
    ) -> Result<Employee, ValidationError> {
        let name = normalize_name(name);
        let department = match self.rules.check_employee(
            &name,
            salary,
            department_id,
            self.snapshot.departments(),
        ) {
            Ok(department) => department.clone(),
            Err(err) => {
                warn!(
                    "event=employee_append module=store status=rejected fields={}",
                    err.fields().len()
                );
                return Err(err);
            }
        };

        let employee = Employee::register(
            self.snapshot.next_employee_id(),
            name,
            salary,
            &department,
            registered_at,
        );
        Arc::make_mut(&mut self.snapshot).push_employee(employee.clone());
        info!(
            "event=employee_append module=store status=ok employee_id={} department_id={}",
            employee.id, employee.department_id
        );
        Ok(employee)
    }
}
