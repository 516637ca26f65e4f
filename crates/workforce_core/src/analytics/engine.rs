//! Department averages, highest-paid lookup and summary statistics.

use crate::model::department::Department;
use crate::model::employee::Employee;
use serde::Serialize;

/// How an employee is matched to a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Membership {
    /// Match on `employee.department_id == department.id`.
    #[default]
    ById,
    /// Match on the captured `employee.department_name == department.name`.
    ByName,
}

impl Membership {
    pub fn includes(self, employee: &Employee, department: &Department) -> bool {
        match self {
            Self::ById => employee.department_id == department.id,
            Self::ByName => employee.department_name == department.name,
        }
    }
}

/// Per-department payroll row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAverage {
    pub department: String,
    pub employee_count: usize,
    /// `0.0` for a department without employees.
    pub average_salary: f64,
    pub total_payroll: f64,
}

/// Highest-paid employee of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestPaid {
    pub department: String,
    /// `None` when the department has no employees.
    pub employee: Option<Employee>,
}

/// Workforce-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_employees: usize,
    pub total_departments: usize,
    pub total_payroll: f64,
    /// `0.0` when there are no employees.
    pub overall_average_salary: f64,
}

/// Result of [`aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub department_averages: Vec<DepartmentAverage>,
    pub highest_paid_by_department: Vec<HighestPaid>,
    pub summary_stats: SummaryStats,
}

/// Department selector of the analytics dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    #[default]
    All,
    Named(String),
}

impl DepartmentFilter {
    fn accepts(&self, department: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == department,
        }
    }
}

impl Analytics {
    /// Narrows the per-department sections to one department.
    ///
    /// `summary_stats` stays workforce-wide.
    pub fn for_department(&self, filter: &DepartmentFilter) -> Analytics {
        Analytics {
            department_averages: self
                .department_averages
                .iter()
                .filter(|row| filter.accepts(&row.department))
                .cloned()
                .collect(),
            highest_paid_by_department: self
                .highest_paid_by_department
                .iter()
                .filter(|row| filter.accepts(&row.department))
                .cloned()
                .collect(),
            summary_stats: self.summary_stats.clone(),
        }
    }
}

/// Computes all three analytics sections with `Membership::ById`.
pub fn aggregate(employees: &[Employee], departments: &[Department]) -> Analytics {
    Analytics {
        department_averages: department_averages(employees, departments, Membership::ById),
        highest_paid_by_department: highest_paid_by_department(
            employees,
            departments,
            Membership::ById,
        ),
        summary_stats: summary_stats(employees, departments),
    }
}

/// Average salary and payroll per department, in input department order.
///
/// Payroll is summed in whole cents.
pub fn department_averages(
    employees: &[Employee],
    departments: &[Department],
    membership: Membership,
) -> Vec<DepartmentAverage> {
    departments
        .iter()
        .map(|department| {
            let (employee_count, total_payroll) = payroll(
                employees
                    .iter()
                    .filter(|employee| membership.includes(employee, department)),
            );
            DepartmentAverage {
                department: department.name.clone(),
                employee_count,
                average_salary: average(total_payroll, employee_count),
                total_payroll,
            }
        })
        .collect()
}

/// Highest-paid employee per department.
///
/// Only a strictly greater salary replaces the current best, so on ties the
/// first employee in input order wins.
pub fn highest_paid_by_department(
    employees: &[Employee],
    departments: &[Department],
    membership: Membership,
) -> Vec<HighestPaid> {
    departments
        .iter()
        .map(|department| {
            let employee = employees
                .iter()
                .filter(|employee| membership.includes(employee, department))
                .fold(None::<&Employee>, |best, employee| match best {
                    Some(current) if employee.salary <= current.salary => Some(current),
                    _ => Some(employee),
                })
                .cloned();
            HighestPaid {
                department: department.name.clone(),
                employee,
            }
        })
        .collect()
}

/// Workforce-wide totals.
///
/// `total_payroll` adds the per-department payrolls in department order, then
/// the payroll of employees matching no department, so it equals the sum of
/// `department_averages(.., Membership::ById)` totals exactly.
pub fn summary_stats(employees: &[Employee], departments: &[Department]) -> SummaryStats {
    let assigned = departments
        .iter()
        .map(|department| {
            payroll(
                employees
                    .iter()
                    .filter(|employee| Membership::ById.includes(employee, department)),
            )
            .1
        })
        .fold(0.0, |total, department_payroll| total + department_payroll);
    let (_, unassigned) = payroll(employees.iter().filter(|employee| {
        !departments
            .iter()
            .any(|department| Membership::ById.includes(employee, department))
    }));
    let total_payroll = assigned + unassigned;

    SummaryStats {
        total_employees: employees.len(),
        total_departments: departments.len(),
        total_payroll,
        overall_average_salary: average(total_payroll, employees.len()),
    }
}

/// Headcount and salary total of `employees`, accumulated in whole cents.
pub(crate) fn payroll<'a>(employees: impl Iterator<Item = &'a Employee>) -> (usize, f64) {
    let (count, cents) = employees.fold((0_usize, 0_i64), |(count, cents), employee| {
        (count + 1, cents + (employee.salary * 100.0).round() as i64)
    });
    (count, cents as f64 / 100.0)
}

pub(crate) fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
