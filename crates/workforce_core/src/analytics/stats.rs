//! Statistics backing the department and employee management views.

use crate::analytics::engine::{average, payroll, Membership};
use crate::model::department::{Department, DepartmentId};
use crate::model::employee::Employee;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Department row enriched with headcount and average salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentOverview {
    pub id: DepartmentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub employee_count: usize,
    pub average_salary: f64,
}

/// Department with the highest average salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDepartment {
    pub department: String,
    pub average_salary: f64,
}

/// Quick statistics of the department management view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentHighlights {
    pub total_departments: usize,
    pub total_employees: usize,
    /// `None` when no department has employees.
    pub highest_average: Option<TopDepartment>,
}

/// Headline numbers of the employee management view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub total_employees: usize,
    pub average_salary: f64,
    /// Distinct captured department names.
    pub distinct_departments: usize,
    pub highest_salary: f64,
}

/// Enriches every department with its headcount and average salary (by id).
pub fn department_overview(
    employees: &[Employee],
    departments: &[Department],
) -> Vec<DepartmentOverview> {
    departments
        .iter()
        .map(|department| {
            let (employee_count, total) = payroll(
                employees
                    .iter()
                    .filter(|employee| Membership::ById.includes(employee, department)),
            );
            DepartmentOverview {
                id: department.id,
                name: department.name.clone(),
                created_at: department.created_at,
                employee_count,
                average_salary: average(total, employee_count),
            }
        })
        .collect()
}

/// Totals plus the department with the strictly highest average salary.
///
/// Departments without employees are skipped; the first one seen wins ties.
pub fn department_highlights(
    employees: &[Employee],
    departments: &[Department],
) -> DepartmentHighlights {
    let highest_average = department_overview(employees, departments)
        .into_iter()
        .filter(|row| row.employee_count > 0)
        .fold(None::<TopDepartment>, |best, row| match best {
            Some(current) if row.average_salary <= current.average_salary => Some(current),
            _ => Some(TopDepartment {
                department: row.name,
                average_salary: row.average_salary,
            }),
        });

    DepartmentHighlights {
        total_departments: departments.len(),
        total_employees: employees.len(),
        highest_average,
    }
}

/// Workforce headline numbers; all zero for an empty list.
pub fn employee_stats(employees: &[Employee]) -> EmployeeStats {
    if employees.is_empty() {
        return EmployeeStats::default();
    }

    let total: f64 = employees.iter().map(|employee| employee.salary).sum();
    let distinct_departments = employees
        .iter()
        .map(|employee| employee.department_name.as_str())
        .collect::<HashSet<_>>()
        .len();
    let highest_salary = employees
        .iter()
        .map(|employee| employee.salary)
        .fold(f64::MIN, f64::max);

    EmployeeStats {
        total_employees: employees.len(),
        average_salary: average(total, employees.len()),
        distinct_departments,
        highest_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::{department_highlights, employee_stats, EmployeeStats};
    use crate::model::department::Department;
    use crate::model::employee::Employee;
    use chrono::Utc;

    #[test]
    fn employee_stats_of_empty_list_are_zero() {
        assert_eq!(employee_stats(&[]), EmployeeStats::default());
    }

    #[test]
    fn highlights_skip_empty_departments_and_keep_first_on_tie() {
        let sales = Department::new(1, "Sales", Utc::now());
        let finance = Department::new(2, "Finance", Utc::now());
        let empty = Department::new(3, "Legal", Utc::now());
        let employees = vec![
            Employee::register(1, "Amanda White", 88_000.0, &sales, Utc::now()),
            Employee::register(2, "Kevin Lewis", 88_000.0, &finance, Utc::now()),
        ];

        let highlights = department_highlights(&employees, &[sales, finance, empty]);
        assert_eq!(highlights.total_departments, 3);
        assert_eq!(highlights.total_employees, 2);
        let top = highlights.highest_average.unwrap();
        assert_eq!(top.department, "Sales");
        assert_eq!(top.average_salary, 88_000.0);
    }

    #[test]
    fn highlights_without_employees_have_no_leader() {
        let legal = Department::new(1, "Legal", Utc::now());
        assert_eq!(department_highlights(&[], &[legal]).highest_average, None);
    }
}
