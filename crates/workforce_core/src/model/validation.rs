//! Field-level validation for department and employee registration.
//!
//! # Responsibility
//! - Normalize raw form input (names, salary text).
//! - Check registration requests against `ValidationRules`.
//! - Report every failing field at once through `ValidationError`.
//!
//! # Invariants
//! - Validation never mutates the record store.
//! - Each field carries at most one message (the first failing rule).

use crate::model::department::{Department, DepartmentId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static SALARY_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.]").expect("valid salary noise regex"));

/// Input field a validation message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationField {
    Name,
    Salary,
    DepartmentId,
}

impl ValidationField {
    /// Stable field key used by form layers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Salary => "salary",
            Self::DepartmentId => "departmentId",
        }
    }
}

/// Recoverable, field-scoped validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    fields: BTreeMap<ValidationField, String>,
}

impl ValidationError {
    /// Creates an error with a single failing field.
    pub fn single(field: ValidationField, message: impl Into<String>) -> Self {
        let mut error = Self::default();
        error.insert(field, message);
        error
    }

    /// Records a message for `field`, keeping the first one if already present.
    pub fn insert(&mut self, field: ValidationField, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the message attached to `field`, if any.
    pub fn message(&self, field: ValidationField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Full field -> message mapping.
    pub fn fields(&self) -> &BTreeMap<ValidationField, String> {
        &self.fields
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed")?;
        for (index, (field, message)) in self.fields.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{}: {message}", field.as_str())?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Bounds applied when registering departments and employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    pub department_name_min_chars: usize,
    pub department_name_max_chars: usize,
    pub employee_name_min_chars: usize,
    pub salary_min: f64,
    pub salary_max: f64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            department_name_min_chars: 2,
            department_name_max_chars: 50,
            employee_name_min_chars: 2,
            salary_min: 1_000.0,
            salary_max: 1_000_000.0,
        }
    }
}

impl ValidationRules {
    /// Validates a normalized department name against existing departments.
    ///
    /// # Errors
    /// - `Name` when blank, outside the length bounds, or already taken
    ///   (case-insensitive).
    pub fn check_department_name(
        &self,
        name: &str,
        existing: &[Department],
    ) -> Result<(), ValidationError> {
        let mut error = ValidationError::default();
        let chars = name.chars().count();

        if name.is_empty() {
            error.insert(ValidationField::Name, "Department name is required");
        } else if chars < self.department_name_min_chars {
            error.insert(
                ValidationField::Name,
                format!(
                    "Department name must be at least {} characters",
                    self.department_name_min_chars
                ),
            );
        } else if chars > self.department_name_max_chars {
            error.insert(
                ValidationField::Name,
                format!(
                    "Department name must be less than {} characters",
                    self.department_name_max_chars
                ),
            );
        } else if existing.iter().any(|department| department.has_name(name)) {
            error.insert(ValidationField::Name, "Department name already exists");
        }

        error.into_result()
    }

    /// Validates an employee registration and resolves its department.
    ///
    /// All failing fields are reported together.
    pub fn check_employee<'a>(
        &self,
        name: &str,
        salary: f64,
        department_id: DepartmentId,
        departments: &'a [Department],
    ) -> Result<&'a Department, ValidationError> {
        let mut error = ValidationError::default();

        if name.is_empty() {
            error.insert(ValidationField::Name, "Employee name is required");
        } else if name.chars().count() < self.employee_name_min_chars {
            error.insert(
                ValidationField::Name,
                format!(
                    "Name must be at least {} characters long",
                    self.employee_name_min_chars
                ),
            );
        }

        if !salary.is_finite() || salary <= 0.0 {
            error.insert(ValidationField::Salary, "Please enter a valid salary amount");
        } else if salary < self.salary_min {
            error.insert(
                ValidationField::Salary,
                format!("Salary must be at least {}", format_dollars(self.salary_min)),
            );
        } else if salary > self.salary_max {
            error.insert(
                ValidationField::Salary,
                format!("Salary cannot exceed {}", format_dollars(self.salary_max)),
            );
        }

        let department = departments
            .iter()
            .find(|department| department.id == department_id);
        if department.is_none() {
            error.insert(
                ValidationField::DepartmentId,
                "Selected department does not exist",
            );
        }

        match (error.into_result(), department) {
            (Ok(()), Some(department)) => Ok(department),
            (Err(error), _) => Err(error),
            (Ok(()), None) => Err(ValidationError::single(
                ValidationField::DepartmentId,
                "Selected department does not exist",
            )),
        }
    }
}

/// Trims a display name and collapses inner whitespace runs to one space.
pub fn normalize_name(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned()
}

/// Parses free-form salary text such as `"$85,000"` or `"72000.50"`.
///
/// Everything except digits and `.` is dropped; only the first `.` acts as a
/// decimal point. Returns `None` when no number remains.
pub fn parse_salary_input(raw: &str) -> Option<f64> {
    let numeric = SALARY_NOISE_RE.replace_all(raw, "");
    let mut parts = numeric.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().map(|rest| rest.replace('.', ""));

    let candidate = match fraction {
        Some(fraction) => format!("{whole}.{fraction}"),
        None => whole.to_string(),
    };
    if candidate.trim_matches('.').is_empty() {
        return None;
    }
    candidate.parse::<f64>().ok()
}

/// Formats whole dollars with thousands separators, e.g. `$1,000,000`.
fn format_dollars(amount: f64) -> String {
    let whole = amount.trunc() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::{format_dollars, normalize_name, parse_salary_input, ValidationError};
    use super::{ValidationField, ValidationRules};

    #[test]
    fn normalize_name_trims_and_collapses_whitespace() {
        assert_eq!(normalize_name("  Human   Resources \n"), "Human Resources");
    }

    #[test]
    fn parse_salary_input_strips_currency_noise() {
        assert_eq!(parse_salary_input("$85,000"), Some(85_000.0));
        assert_eq!(parse_salary_input("72000.5.0"), Some(72_000.5));
        assert_eq!(parse_salary_input("abc"), None);
        assert_eq!(parse_salary_input("."), None);
    }

    #[test]
    fn format_dollars_groups_thousands() {
        assert_eq!(format_dollars(1_000.0), "$1,000");
        assert_eq!(format_dollars(1_000_000.0), "$1,000,000");
        assert_eq!(format_dollars(999.0), "$999");
    }

    #[test]
    fn insert_keeps_first_message_per_field() {
        let mut error = ValidationError::single(ValidationField::Name, "first");
        error.insert(ValidationField::Name, "second");
        assert_eq!(error.message(ValidationField::Name), Some("first"));
    }

    #[test]
    fn display_lists_every_field() {
        let rules = ValidationRules::default();
        let error = rules.check_employee("", 500.0, 1, &[]).unwrap_err();
        let rendered = error.to_string();
        assert!(rendered.contains("name: Employee name is required"));
        assert!(rendered.contains("salary: Salary must be at least $1,000"));
        assert!(rendered.contains("departmentId: Selected department does not exist"));
    }
}
