//! Immutable point-in-time view of the record store.

use crate::model::department::{Department, DepartmentId};
use crate::model::employee::{Employee, EmployeeId};
use crate::store::source::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete dataset handed to the aggregation engine and query pipeline.
///
/// Both lists keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    departments: Vec<Department>,
    #[serde(default)]
    employees: Vec<Employee>,
}

impl Snapshot {
    pub fn new(departments: Vec<Department>, employees: Vec<Employee>) -> Self {
        Self {
            departments,
            employees,
        }
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|department| department.id == id)
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.employees.is_empty()
    }

    /// Next department id: one past the largest assigned id.
    pub fn next_department_id(&self) -> DepartmentId {
        self.departments
            .iter()
            .map(|department| department.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Next employee id: one past the largest assigned id.
    pub fn next_employee_id(&self) -> EmployeeId {
        self.employees
            .iter()
            .map(|employee| employee.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub(crate) fn push_department(&mut self, department: Department) {
        self.departments.push(department);
    }

    pub(crate) fn push_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Checks the record invariants of an externally produced dataset.
    ///
    /// # Errors
    /// - `LoadError::InvalidSnapshot` on duplicate ids, case-insensitive
    ///   duplicate department names, or an employee whose `department_id`
    ///   does not resolve.
    pub fn validate(&self) -> Result<(), LoadError> {
        let mut department_ids = HashSet::new();
        let mut department_names = HashSet::new();
        for department in &self.departments {
            if !department_ids.insert(department.id) {
                return Err(LoadError::InvalidSnapshot(format!(
                    "duplicate department id {}",
                    department.id
                )));
            }
            if !department_names.insert(department.name.to_lowercase()) {
                return Err(LoadError::InvalidSnapshot(format!(
                    "duplicate department name `{}`",
                    department.name
                )));
            }
        }

        let mut employee_ids = HashSet::new();
        for employee in &self.employees {
            if !employee_ids.insert(employee.id) {
                return Err(LoadError::InvalidSnapshot(format!(
                    "duplicate employee id {}",
                    employee.id
                )));
            }
            if !department_ids.contains(&employee.department_id) {
                return Err(LoadError::InvalidSnapshot(format!(
                    "employee {} references unknown department {}",
                    employee.id, employee.department_id
                )));
            }
        }

        Ok(())
    }
}
