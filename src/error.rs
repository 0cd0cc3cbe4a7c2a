use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(
        "Log file not found at: {}\nMake sure you've completed at least one check-in first.",
        path.display()
    )]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the Focus Time config directory; pass --log <PATH>")]
    LogNotFound,

    #[error("No check-ins recorded yet!")]
    EmptyDataset,

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to load config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Failed to write chart document {}: {reason}", path.display())]
    ChartOutput { path: PathBuf, reason: String },
}

/// Why a single log line was rejected
#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp \"{input}\"")]
    Timestamp { input: String },

    #[error("invalid UTF-8: {0}")]
    Read(std::io::Error),
}
