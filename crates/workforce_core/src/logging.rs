//! File logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger at most once per process.
//! - Keep log events metadata-only (`event=... module=... status=...`).
//!
//! # Invariants
//! - Re-initializing with the same level and directory is a no-op.
//! - Switching level or directory after start is rejected.
//! - Initialization never panics; without a directory logging stays off.

use crate::config::LoggingConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "workforce";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging as described by `config`.
///
/// Returns `Ok(false)` when `config.dir` is unset (logging stays off) and
/// `Ok(true)` once the logger is active.
///
/// # Errors
/// - Unsupported level, relative directory, or directory creation failure.
/// - An attempt to switch level or directory of the running logger.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, String> {
    let Some(dir) = config.dir.as_deref() else {
        return Ok(false);
    };
    let level = parse_level(&config.level)?;
    let dir = absolute_dir(dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &dir))?;
    if active.dir != dir {
        return Err(format!(
            "logger already writing to `{}`; refusing `{}`",
            active.dir.display(),
            dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logger already running at `{}`; refusing `{}`",
            active.level, level
        ));
    }
    Ok(true)
}

/// Level and directory of the running logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    info!(
        "event=logging_init module=core status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn parse_level(raw: &str) -> Result<&'static str, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn absolute_dir(dir: &Path) -> Result<PathBuf, String> {
    if dir.as_os_str().is_empty() {
        return Err("log directory cannot be empty".to_string());
    }
    if !dir.is_absolute() {
        return Err(format!(
            "log directory must be absolute, got `{}`",
            dir.display()
        ));
    }
    Ok(dir.to_path_buf())
}
