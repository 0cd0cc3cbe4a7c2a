use comfy_table::{Cell, Color, Table};
use std::fmt::Write;

use crate::consts::{DATE_FORMAT, GOAL_LABEL_WIDTH, SEARCH_DISPLAY_LIMIT, TOP_GOALS};
use crate::core::{Entry, KeywordQuery, Summary};
use crate::output::format::{
    create_styled_table, format_percent, format_timestamp, header_cell, rate_color, right_cell,
    status_bar, truncate_label,
};
use crate::utils::Timezone;

/// Styled table; plain output also skips terminal styling entirely
fn new_table(use_color: bool) -> Table {
    let mut table = create_styled_table();
    if !use_color {
        table.force_no_tty();
    }
    table
}

fn status_table(summary: &Summary, use_color: bool) -> Table {
    let mut table = new_table(use_color);
    table.set_header(vec![
        header_cell("Status", use_color),
        header_cell("Check-ins", use_color),
        header_cell("Share", use_color),
        header_cell("", use_color),
    ]);
    let bar_color = if use_color { Some(Color::Blue) } else { None };
    for s in &summary.statuses {
        let mut bar = Cell::new(status_bar(s.percentage));
        if let Some(c) = bar_color {
            bar = bar.fg(c);
        }
        table.add_row(vec![
            Cell::new(&s.status),
            right_cell(&s.count.to_string(), None),
            right_cell(&format_percent(s.percentage), None),
            bar,
        ]);
    }
    table
}

fn metrics_table(summary: &Summary, use_color: bool) -> Table {
    let rates = &summary.rates;
    let mut table = new_table(use_color);
    table.set_header(vec![header_cell("Metric", use_color), header_cell("Rate", use_color)]);
    table.add_row(vec![
        Cell::new("On-Task"),
        right_cell(&format_percent(rates.on_task), rate_color(rates.on_task, use_color)),
    ]);
    table.add_row(vec![
        Cell::new("Distraction"),
        right_cell(&format_percent(rates.distraction), None),
    ]);
    table.add_row(vec![
        Cell::new("Break"),
        right_cell(&format_percent(rates.break_rate), None),
    ]);
    table
}

fn hourly_table(summary: &Summary, use_color: bool) -> Table {
    let mut table = new_table(use_color);
    table.set_header(vec![
        header_cell("Hour", use_color),
        header_cell("Check-ins", use_color),
        header_cell("On-Task Rate", use_color),
    ]);
    for h in &summary.hours {
        let rate = h.on_task_rate();
        table.add_row(vec![
            Cell::new(format!("{:02}:00", h.hour)),
            right_cell(&h.total.to_string(), None),
            right_cell(&format_percent(rate), rate_color(rate, use_color)),
        ]);
    }
    table
}

fn goal_table(summary: &Summary, use_color: bool) -> Table {
    let mut table = new_table(use_color);
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Goal", use_color),
        header_cell("Check-ins", use_color),
        header_cell("On-Task", use_color),
    ]);
    for (i, g) in summary.goals.iter().take(TOP_GOALS).enumerate() {
        let rate = g.on_task_rate();
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None),
            Cell::new(truncate_label(&g.goal, GOAL_LABEL_WIDTH)),
            right_cell(&g.total.to_string(), None),
            right_cell(&format_percent(rate), rate_color(rate, use_color)),
        ]);
    }
    table
}

/// Full report as boxed tables
pub(crate) fn render_report_table(summary: &Summary, use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n  Focus Time Analysis\n");
    let _ = writeln!(
        out,
        "  {} check-ins from {} to {} ({} days tracked)\n",
        summary.total,
        summary.first.format(DATE_FORMAT),
        summary.last.format(DATE_FORMAT),
        summary.days_tracked
    );

    let _ = writeln!(out, "  Status Distribution\n");
    let _ = writeln!(out, "{}\n", status_table(summary, use_color));
    let _ = writeln!(out, "  Focus Metrics\n");
    let _ = writeln!(out, "{}\n", metrics_table(summary, use_color));
    let _ = writeln!(out, "  Time of Day\n");
    let _ = writeln!(out, "{}\n", hourly_table(summary, use_color));
    let _ = writeln!(out, "  Top Goals\n");
    let _ = writeln!(out, "{}", goal_table(summary, use_color));
    out
}

/// Search matches as a table, capped like the plain listing
pub(crate) fn render_matches_table(
    query: &KeywordQuery,
    matches: &[&Entry],
    timezone: Timezone,
    use_color: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n  Entries with keywords: {}\n", query.keywords().join(", "));

    if matches.is_empty() {
        let _ = writeln!(out, "  No matches found.");
        return out;
    }

    let mut table = new_table(use_color);
    table.set_header(vec![
        header_cell("Time", use_color),
        header_cell("Status", use_color),
        header_cell("Goal", use_color),
        header_cell("Note", use_color),
    ]);
    for entry in matches.iter().take(SEARCH_DISPLAY_LIMIT) {
        table.add_row(vec![
            Cell::new(format_timestamp(timezone.apply(entry.timestamp))),
            Cell::new(&entry.status),
            Cell::new(entry.goal.as_deref().filter(|g| !g.is_empty()).unwrap_or("N/A")),
            Cell::new(entry.notes.as_deref().unwrap_or("")),
        ]);
    }
    let _ = writeln!(out, "{table}");
    if matches.len() > SEARCH_DISPLAY_LIMIT {
        let _ = writeln!(out, "\n  ... and {} more", matches.len() - SEARCH_DISPLAY_LIMIT);
    }
    out
}
