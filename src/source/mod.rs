//! Log source layer
//!
//! The core only needs "a sequence of lines"; `LineSource` hides where they
//! come from.

pub(crate) mod locate;
pub(crate) mod parser;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::AppError;

/// Anything that yields the raw lines of a focus log
pub(crate) trait LineSource {
    /// Human-readable location for messages
    fn describe(&self) -> String;

    /// Read all lines in one pass
    fn read_lines(&self) -> Result<Vec<io::Result<String>>, AppError>;
}

/// Focus log on disk
pub(crate) struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl LineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<io::Result<String>>, AppError> {
        let unavailable = |source: io::Error| AppError::SourceUnavailable {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(unavailable)?;

        // Bad UTF-8 consumes its line and is a malformed record; any other
        // read error (e.g. EISDIR) repeats forever and ends the read.
        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            match line {
                Err(e) if e.kind() != io::ErrorKind::InvalidData => return Err(unavailable(e)),
                line => lines.push(line),
            }
        }
        Ok(lines)
    }
}

pub(crate) use locate::resolve_log_path;
pub(crate) use parser::{ParseOutcome, parse_lines};
