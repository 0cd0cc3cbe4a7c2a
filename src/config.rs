use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::StatusRules;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigStyle {
    Plain,
    Table,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) log_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) style: Option<ConfigStyle>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) no_charts: bool,
    #[serde(default)]
    pub(crate) chart_output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) markers: StatusRules,
}

impl Config {
    /// Load the first config found in the default locations.
    /// A broken default config is reported and ignored.
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => tracing::warn!("{e}"),
            }
        }

        Self::default()
    }

    /// Load an explicitly requested config file; failures are fatal
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| AppError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str::<Config>(content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/focusstats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("focusstats").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support/focusstats/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("focusstats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.focusstats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".focusstats.toml"));
        }

        paths
    }
}
