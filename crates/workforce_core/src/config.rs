//! Engine configuration.
//!
//! # Responsibility
//! - Describe tunables (page size, validation bounds, logging) in one place.
//! - Decode them from JSON with every field defaulted.
//!
//! # Invariants
//! - A config returned by `from_json_str`/`load` has passed `validate()`.
//! - Unknown keys are rejected instead of silently ignored.

use crate::logging::default_log_level;
use crate::model::validation::ValidationRules;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration loading/validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file could not be read.
    Io { path: PathBuf, message: String },
    /// Config text is not valid JSON for `EngineConfig`.
    Parse(String),
    /// Values decoded but are inconsistent.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to read config `{}`: {message}", path.display())
            }
            Self::Parse(message) => write!(f, "invalid config document: {message}"),
            Self::Invalid(message) => write!(f, "invalid config value: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Logging section of the engine config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute log directory. `None` leaves logging off.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Rows per table page.
    pub page_size: usize,
    pub validation: ValidationRules,
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            validation: ValidationRules::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Decodes and validates a JSON config document.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, decodes and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_json_str(&document)
    }

    /// Checks cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()));
        }

        let rules = &self.validation;
        if rules.department_name_min_chars == 0 {
            return Err(ConfigError::Invalid(
                "department_name_min_chars must be at least 1".to_string(),
            ));
        }
        if rules.department_name_min_chars > rules.department_name_max_chars {
            return Err(ConfigError::Invalid(format!(
                "department name bounds are reversed: {} > {}",
                rules.department_name_min_chars, rules.department_name_max_chars
            )));
        }
        if rules.employee_name_min_chars == 0 {
            return Err(ConfigError::Invalid(
                "employee_name_min_chars must be at least 1".to_string(),
            ));
        }
        if !(rules.salary_min.is_finite() && rules.salary_max.is_finite())
            || rules.salary_min <= 0.0
            || rules.salary_min > rules.salary_max
        {
            return Err(ConfigError::Invalid(format!(
                "salary bounds must be positive and ordered, got {}..{}",
                rules.salary_min, rules.salary_max
            )));
        }

        if let Some(dir) = &self.logging.dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "logging.dir must be absolute, got `{}`",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}
