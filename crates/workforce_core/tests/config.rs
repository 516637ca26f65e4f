use std::io::Write;
use tempfile::NamedTempFile;
use workforce_core::{ConfigError, EngineConfig, WorkforceService};

#[test]
fn load_reads_partial_file_over_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"page_size": 25, "validation": {{"salary_min": 30000}}}}"#
    )
    .unwrap();

    let config = EngineConfig::load(file.path()).unwrap();

    assert_eq!(config.page_size, 25);
    assert_eq!(config.validation.salary_min, 30_000.0);
    assert_eq!(config.validation.salary_max, 1_000_000.0);
    assert!(config.logging.dir.is_none());
    assert_eq!(WorkforceService::new(&config).page_size(), 25);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let err = EngineConfig::load(&missing).unwrap_err();

    assert!(matches!(err, ConfigError::Io { ref path, .. } if path == &missing));
}

#[test]
fn reversed_salary_bounds_are_invalid() {
    let err = EngineConfig::from_json_str(
        r#"{"validation": {"salary_min": 5000, "salary_max": 4000}}"#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn relative_log_dir_is_invalid() {
    let err = EngineConfig::from_json_str(r#"{"logging": {"dir": "logs"}}"#).unwrap_err();

    assert!(err.to_string().contains("absolute"));
}
