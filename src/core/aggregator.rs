//! Aggregation of check-ins into summary views
//!
//! Every function is a pure read of the entry slice. `summarize` runs the
//! independent views in parallel.

use chrono::{NaiveDate, TimeDelta, Timelike};
use std::collections::{BTreeMap, HashMap};

use crate::core::rules::StatusRules;
use crate::core::types::{
    DayBucket, Entry, FocusRates, GoalBucket, HourBucket, StatusCount, Summary, percentage,
};
use crate::error::AppError;
use crate::utils::Timezone;

#[derive(Debug, Default, Clone, Copy)]
struct Counts {
    total: usize,
    on_task: usize,
}

/// Group entries by a string key, keeping first-seen order of keys
fn group_in_order<'a, F>(entries: &'a [Entry], rules: &StatusRules, key: F) -> Vec<(&'a str, Counts)>
where
    F: Fn(&'a Entry) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Counts)> = Vec::new();

    for entry in entries {
        let k = key(entry);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, Counts::default()));
            groups.len() - 1
        });
        let counts = &mut groups[slot].1;
        counts.total += 1;
        if rules.is_on_task(&entry.status) {
            counts.on_task += 1;
        }
    }

    groups
}

/// Count per distinct status, ranked by count (ties keep encounter order)
pub(crate) fn status_distribution(entries: &[Entry], rules: &StatusRules) -> Vec<StatusCount> {
    let total = entries.len();
    let mut groups = group_in_order(entries, rules, |e| e.status.as_str());
    groups.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    groups
        .into_iter()
        .map(|(status, counts)| StatusCount {
            status: status.to_string(),
            count: counts.total,
            percentage: percentage(counts.total, total),
        })
        .collect()
}

pub(crate) fn focus_rates(entries: &[Entry], rules: &StatusRules) -> FocusRates {
    let total = entries.len();
    let mut on_task = 0;
    let mut distraction = 0;
    let mut breaks = 0;

    for entry in entries {
        let status = entry.status.as_str();
        if rules.is_on_task(status) {
            on_task += 1;
        }
        if rules.is_distraction(status) {
            distraction += 1;
        }
        if rules.is_break(status) {
            breaks += 1;
        }
    }

    FocusRates {
        on_task: percentage(on_task, total),
        distraction: percentage(distraction, total),
        break_rate: percentage(breaks, total),
    }
}

/// Sparse per-hour buckets in ascending hour order
pub(crate) fn hourly_breakdown(
    entries: &[Entry],
    rules: &StatusRules,
    timezone: Timezone,
) -> Vec<HourBucket> {
    let mut hours: BTreeMap<u32, Counts> = BTreeMap::new();

    for entry in entries {
        let hour = timezone.apply(entry.timestamp).hour();
        let counts = hours.entry(hour).or_default();
        counts.total += 1;
        if rules.is_on_task(&entry.status) {
            counts.on_task += 1;
        }
    }

    hours
        .into_iter()
        .map(|(hour, counts)| HourBucket {
            hour,
            total: counts.total,
            on_task: counts.on_task,
        })
        .collect()
}

/// All goals ranked by check-in count (ties keep encounter order)
pub(crate) fn goal_ranking(entries: &[Entry], rules: &StatusRules) -> Vec<GoalBucket> {
    let mut groups = group_in_order(entries, rules, Entry::goal_label);
    groups.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    groups
        .into_iter()
        .map(|(goal, counts)| GoalBucket {
            goal: goal.to_string(),
            total: counts.total,
            on_task: counts.on_task,
        })
        .collect()
}

/// Per-day totals and status counts in ascending date order
pub(crate) fn daily_breakdown(entries: &[Entry], timezone: Timezone) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for entry in entries {
        let date = timezone.apply(entry.timestamp).date_naive();
        let day = days.entry(date).or_insert_with(|| DayBucket {
            date,
            total: 0,
            statuses: Vec::new(),
        });
        day.total += 1;
        match day.statuses.iter_mut().find(|(s, _)| *s == entry.status) {
            Some((_, count)) => *count += 1,
            None => day.statuses.push((entry.status.clone(), 1)),
        }
    }

    days.into_values().collect()
}

/// Whole days in `delta`, rounded toward negative infinity
fn floor_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    if delta < TimeDelta::zero() && delta != TimeDelta::days(days) {
        days - 1
    } else {
        days
    }
}

/// Compute every report view; an empty slice is `EmptyDataset`
pub(crate) fn summarize(
    entries: &[Entry],
    rules: &StatusRules,
    timezone: Timezone,
) -> Result<Summary, AppError> {
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return Err(AppError::EmptyDataset);
    };
    let days_tracked = floor_days(last.timestamp - first.timestamp) + 1;

    let ((statuses, rates), ((hours, goals), days)) = rayon::join(
        || {
            rayon::join(
                || status_distribution(entries, rules),
                || focus_rates(entries, rules),
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || hourly_breakdown(entries, rules, timezone),
                        || goal_ranking(entries, rules),
                    )
                },
                || daily_breakdown(entries, timezone),
            )
        },
    );

    Ok(Summary {
        total: entries.len(),
        first: timezone.apply(first.timestamp),
        last: timezone.apply(last.timestamp),
        days_tracked,
        statuses,
        rates,
        hours,
        goals,
        days,
    })
}
