//! Focus log JSONL parser
//!
//! One JSON object per line. A bad line is logged and skipped; it never
//! aborts the run or affects the lines around it.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Deserialize;
use std::io;

use crate::core::Entry;
use crate::error::ParseError;

// ============================================================================
// Internal types for JSONL parsing
// ============================================================================

#[derive(Debug, Deserialize)]
struct CheckInRecord {
    timestamp: String,
    reported_status: String,
    #[serde(default)]
    session_goal: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

/// Offset-less layouts, read as UTC
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// ============================================================================
// Parsing
// ============================================================================

#[derive(Debug, Default)]
pub(crate) struct ParseOutcome {
    pub(crate) entries: Vec<Entry>,
    /// Non-blank lines that could not be used
    pub(crate) skipped: usize,
}

/// Parse an ISO-8601 timestamp; `Z` is `+00:00` and a missing offset means UTC
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| ParseError::Timestamp {
            input: raw.to_string(),
        })
}

pub(crate) fn parse_line(line: &str) -> Result<Entry, ParseError> {
    let record: CheckInRecord = serde_json::from_str(line)?;
    let timestamp = parse_timestamp(&record.timestamp)?;

    Ok(Entry {
        timestamp,
        status: record.reported_status,
        goal: record.session_goal,
        notes: record.notes,
    })
}

/// Parse every line, skipping (and warning about) the ones that fail
pub(crate) fn parse_lines<I>(lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut outcome = ParseOutcome::default();

    for (line_no, line) in lines.into_iter().enumerate() {
        let parsed = match line {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                parse_line(&line)
            }
            Err(err) => Err(ParseError::Read(err)),
        };

        match parsed {
            Ok(entry) => outcome.entries.push(entry),
            Err(err) => {
                tracing::warn!("Skipping invalid line {}: {}", line_no + 1, err);
                outcome.skipped += 1;
            }
        }
    }

    tracing::debug!(
        parsed = outcome.entries.len(),
        skipped = outcome.skipped,
        "parsed focus log"
    );
    outcome
}
