//! Core data types for check-ins and their summaries
//!
//! Entries are parsed once and never mutated; every summary type here is
//! derived fresh from the full entry slice on each run.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::consts::NO_GOAL;

/// One check-in from the focus log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Entry {
    pub(crate) timestamp: DateTime<FixedOffset>,
    #[serde(rename = "reported_status")]
    pub(crate) status: String,
    #[serde(rename = "session_goal", skip_serializing_if = "Option::is_none")]
    pub(crate) goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notes: Option<String>,
}

impl Entry {
    /// Goal used for grouping; absent and empty goals share one bucket
    pub(crate) fn goal_label(&self) -> &str {
        match self.goal.as_deref() {
            Some(goal) if !goal.is_empty() => goal,
            _ => NO_GOAL,
        }
    }

    pub(crate) fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// Percentage of `part` in `total`, 0 when there is nothing to divide by
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StatusCount {
    pub(crate) status: String,
    pub(crate) count: usize,
    pub(crate) percentage: f64,
}

/// On-task, distraction and break rates in percent.
/// Computed independently, so they need not sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct FocusRates {
    pub(crate) on_task: f64,
    pub(crate) distraction: f64,
    pub(crate) break_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HourBucket {
    pub(crate) hour: u32,
    pub(crate) total: usize,
    pub(crate) on_task: usize,
}

impl HourBucket {
    pub(crate) fn on_task_rate(&self) -> f64 {
        percentage(self.on_task, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GoalBucket {
    pub(crate) goal: String,
    pub(crate) total: usize,
    pub(crate) on_task: usize,
}

impl GoalBucket {
    pub(crate) fn on_task_rate(&self) -> f64 {
        percentage(self.on_task, self.total)
    }
}

/// Check-ins on one calendar day, with per-status counts in encounter order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayBucket {
    pub(crate) date: NaiveDate,
    pub(crate) total: usize,
    pub(crate) statuses: Vec<(String, usize)>,
}

/// Everything the full report shows
#[derive(Debug, Clone)]
pub(crate) struct Summary {
    pub(crate) total: usize,
    pub(crate) first: DateTime<FixedOffset>,
    pub(crate) last: DateTime<FixedOffset>,
    pub(crate) days_tracked: i64,
    pub(crate) statuses: Vec<StatusCount>,
    pub(crate) rates: FocusRates,
    pub(crate) hours: Vec<HourBucket>,
    /// Full ranking; display code truncates
    pub(crate) goals: Vec<GoalBucket>,
    pub(crate) days: Vec<DayBucket>,
}
