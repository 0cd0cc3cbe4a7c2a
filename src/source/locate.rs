//! Focus log discovery
//!
//! The Focus Time app keeps its log in the platform config directory.

use std::env;
use std::path::{Path, PathBuf};

use crate::consts::{LOG_FILE_NAME, LOG_PATH_ENV};
use crate::error::AppError;

/// App directory name under the platform config dir
fn app_dir_name() -> &'static str {
    if cfg!(target_os = "linux") {
        "focus-time"
    } else {
        "com.focustime.app"
    }
}

/// `~/.config/focus-time/focus_log.jsonl` on Linux,
/// `<config_dir>/com.focustime.app/focus_log.jsonl` elsewhere
pub(crate) fn default_log_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(app_dir_name()).join(LOG_FILE_NAME))
}

/// Pick the log path: CLI flag, then `FOCUS_TIME_LOG`, then config, then default
pub(crate) fn resolve_log_path(
    cli_path: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<PathBuf, AppError> {
    resolve_with_env(cli_path, env::var(LOG_PATH_ENV).ok(), config_path)
}

fn resolve_with_env(
    cli_path: Option<&Path>,
    env_path: Option<String>,
    config_path: Option<&Path>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = cli_path {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config_path {
        return Ok(path.to_path_buf());
    }
    default_log_path().ok_or(AppError::LogNotFound)
}
