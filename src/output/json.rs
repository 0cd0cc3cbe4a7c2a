use serde_json::{Value, json};

use crate::consts::DATE_FORMAT;
use crate::core::{Entry, KeywordQuery, Summary};
use crate::utils::Timezone;

/// Full summary as JSON; unlike the text report, goals are not truncated
pub(crate) fn output_summary_json(summary: &Summary, skipped: usize) -> String {
    let statuses: Vec<Value> = summary
        .statuses
        .iter()
        .map(|s| {
            json!({
                "status": s.status,
                "count": s.count,
                "percentage": s.percentage,
            })
        })
        .collect();

    let hours: Vec<Value> = summary
        .hours
        .iter()
        .map(|h| {
            json!({
                "hour": h.hour,
                "checkins": h.total,
                "on_task": h.on_task,
                "on_task_rate": h.on_task_rate(),
            })
        })
        .collect();

    let goals: Vec<Value> = summary
        .goals
        .iter()
        .map(|g| {
            json!({
                "goal": g.goal,
                "checkins": g.total,
                "on_task": g.on_task,
                "on_task_rate": g.on_task_rate(),
            })
        })
        .collect();

    let days: Vec<Value> = summary
        .days
        .iter()
        .map(|d| {
            let statuses: Vec<Value> = d
                .statuses
                .iter()
                .map(|(status, count)| json!({ "status": status, "count": count }))
                .collect();
            json!({
                "date": d.date.format(DATE_FORMAT).to_string(),
                "checkins": d.total,
                "statuses": statuses,
            })
        })
        .collect();

    let output = json!({
        "total_checkins": summary.total,
        "skipped_lines": skipped,
        "first_checkin": summary.first.to_rfc3339(),
        "last_checkin": summary.last.to_rfc3339(),
        "days_tracked": summary.days_tracked,
        "status_distribution": statuses,
        "focus_metrics": {
            "on_task_rate": summary.rates.on_task,
            "distraction_rate": summary.rates.distraction,
            "break_rate": summary.rates.break_rate,
        },
        "hourly": hours,
        "goals": goals,
        "daily": days,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

/// Report for a log without usable check-ins
pub(crate) fn output_empty_json(skipped: usize) -> String {
    let output = json!({
        "total_checkins": 0,
        "skipped_lines": skipped,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

/// Every match (no display cap) in log order, timestamps on the report clock
pub(crate) fn output_matches_json(
    query: &KeywordQuery,
    matches: &[&Entry],
    timezone: Timezone,
) -> String {
    let matches: Vec<Entry> = matches
        .iter()
        .map(|entry| Entry {
            timestamp: timezone.apply(entry.timestamp),
            ..(*entry).clone()
        })
        .collect();
    let output = json!({
        "keywords": query.keywords(),
        "match_count": matches.len(),
        "matches": matches,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}
