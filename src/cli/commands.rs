//! CLI subcommand definitions

use clap::Subcommand;

use crate::consts::DEFAULT_KEYWORDS;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show the full focus report (default)
    Report,
    /// Search check-in notes for keywords (case-insensitive)
    #[command(alias = "search")]
    Notes {
        /// Keywords to look for; defaults to "progress" and "stuck"
        keywords: Vec<String>,
    },
}

/// Normalized command after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RunMode {
    Report,
    Search(Vec<String>),
}

impl From<Option<Commands>> for RunMode {
    fn from(cmd: Option<Commands>) -> Self {
        match cmd {
            None | Some(Commands::Report) => RunMode::Report,
            Some(Commands::Notes { keywords }) if keywords.is_empty() => {
                RunMode::Search(DEFAULT_KEYWORDS.map(String::from).to_vec())
            }
            Some(Commands::Notes { keywords }) => RunMode::Search(keywords),
        }
    }
}
