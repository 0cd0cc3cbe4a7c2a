//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigStyle};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ReportStyle {
    /// Fixed-width text sections (default)
    #[default]
    Plain,
    /// Boxed tables
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "focusstats")]
#[command(about = "Focus Time check-in statistics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Focus log to read (default: the Focus Time app's log)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) log: Option<PathBuf>,

    /// Config file to load instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Report style
    #[arg(long, global = true, value_enum, default_value = "plain")]
    pub(crate) style: ReportStyle,

    /// Color output mode (table style)
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Clock for hours and dates: "recorded" (default), "local", or a name like "Europe/Berlin"
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Where to write the chart document
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) chart_output: Option<PathBuf>,

    /// Skip visualizations
    #[arg(long, global = true)]
    pub(crate) no_charts: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.no_charts && config.no_charts {
            self.no_charts = true;
        }

        // For enum values, apply config only if CLI is at default
        if let Some(style) = config.style
            && self.style == ReportStyle::Plain
            && style == ConfigStyle::Table
        {
            self.style = ReportStyle::Table;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            match color {
                ConfigColorMode::Always => self.color = ColorMode::Always,
                ConfigColorMode::Never => self.color = ColorMode::Never,
                ConfigColorMode::Auto => {}
            }
        }

        // String options: only apply if CLI didn't set them
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.chart_output.is_none() {
            self.chart_output = config.chart_output.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
