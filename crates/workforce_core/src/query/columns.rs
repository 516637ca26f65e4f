//! Table columns of the workforce records.

use crate::analytics::stats::DepartmentOverview;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::query::field::{FieldValue, Tabular};
use std::borrow::Cow;

/// Columns of the employee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeColumn {
    Id,
    Name,
    Salary,
    DepartmentId,
    DepartmentName,
    RegistrationDate,
}

impl EmployeeColumn {
    /// Columns searched by the employee search box.
    pub const SEARCHABLE: [EmployeeColumn; 2] = [Self::Name, Self::DepartmentName];
}

impl Tabular for Employee {
    type Column = EmployeeColumn;

    fn value(&self, column: EmployeeColumn) -> FieldValue<'_> {
        match column {
            EmployeeColumn::Id => FieldValue::Number(self.id as f64),
            EmployeeColumn::Name => FieldValue::Text(Cow::Borrowed(&self.name)),
            EmployeeColumn::Salary => FieldValue::Number(self.salary),
            EmployeeColumn::DepartmentId => FieldValue::Number(self.department_id as f64),
            EmployeeColumn::DepartmentName => {
                FieldValue::Text(Cow::Borrowed(&self.department_name))
            }
            EmployeeColumn::RegistrationDate => FieldValue::Timestamp(self.registration_date),
        }
    }
}

/// Columns of the plain department list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentColumn {
    Id,
    Name,
    CreatedAt,
}

impl DepartmentColumn {
    /// Columns searched by the department search box.
    pub const SEARCHABLE: [DepartmentColumn; 1] = [Self::Name];
}

impl Tabular for Department {
    type Column = DepartmentColumn;

    fn value(&self, column: DepartmentColumn) -> FieldValue<'_> {
        match column {
            DepartmentColumn::Id => FieldValue::Number(self.id as f64),
            DepartmentColumn::Name => FieldValue::Text(Cow::Borrowed(&self.name)),
            DepartmentColumn::CreatedAt => FieldValue::Timestamp(self.created_at),
        }
    }
}

/// Columns of the enriched department table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverviewColumn {
    Name,
    EmployeeCount,
    AverageSalary,
    CreatedAt,
}

impl Tabular for DepartmentOverview {
    type Column = OverviewColumn;

    fn value(&self, column: OverviewColumn) -> FieldValue<'_> {
        match column {
            OverviewColumn::Name => FieldValue::Text(Cow::Borrowed(&self.name)),
            OverviewColumn::EmployeeCount => FieldValue::Number(self.employee_count as f64),
            OverviewColumn::AverageSalary => FieldValue::Number(self.average_salary),
            OverviewColumn::CreatedAt => FieldValue::Timestamp(self.created_at),
        }
    }
}
