//! Plain-text focus report
//!
//! The layout (rules, column widths, one-decimal percentages) is stable so
//! the output can be diffed and scripted against.

use std::fmt::Write;

use crate::chart::ChartOutcome;
use crate::consts::{DATE_FORMAT, GOAL_LABEL_WIDTH, TOP_GOALS};
use crate::core::Summary;
use crate::output::format::{format_percent, heavy_rule, light_rule, status_bar, truncate_label};

fn write_title(out: &mut String) {
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "FOCUS TIME - DATA ANALYSIS");
    let _ = writeln!(out, "{}", heavy_rule());
    out.push('\n');
}

fn write_section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", light_rule());
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", light_rule());
}

/// Report for a log without usable check-ins
pub(crate) fn render_empty_report() -> String {
    let mut out = String::new();
    write_title(&mut out);
    let _ = writeln!(out, "Total Check-ins: 0");
    let _ = writeln!(out, "No check-ins recorded yet!");
    out
}

pub(crate) fn render_report(summary: &Summary) -> String {
    let mut out = String::new();
    write_title(&mut out);

    let _ = writeln!(out, "Total Check-ins: {}", summary.total);
    let _ = writeln!(
        out,
        "Date Range: {} to {}",
        summary.first.format(DATE_FORMAT),
        summary.last.format(DATE_FORMAT)
    );
    let _ = writeln!(out, "Days Tracked: {}", summary.days_tracked);
    out.push('\n');

    write_section(&mut out, "STATUS DISTRIBUTION");
    for s in &summary.statuses {
        let _ = writeln!(
            out,
            "{:<25} {:>4} ({:>5.1}%) {}",
            s.status,
            s.count,
            s.percentage,
            status_bar(s.percentage)
        );
    }
    out.push('\n');

    write_section(&mut out, "FOCUS METRICS");
    let rates = &summary.rates;
    let _ = writeln!(out, "On-Task Rate: {}", format_percent(rates.on_task));
    let _ = writeln!(out, "Distraction Rate: {}", format_percent(rates.distraction));
    let _ = writeln!(out, "Break Rate: {}", format_percent(rates.break_rate));
    out.push('\n');

    write_section(&mut out, "TIME OF DAY ANALYSIS");
    out.push('\n');
    let _ = writeln!(out, "Hour | Check-ins | On-Task Rate");
    let _ = writeln!(out, "-----|-----------|-------------");
    for h in &summary.hours {
        let _ = writeln!(
            out,
            "{:02}:00 |    {:>3}    | {:>5.1}%",
            h.hour,
            h.total,
            h.on_task_rate()
        );
    }
    out.push('\n');

    write_section(&mut out, "GOAL ANALYSIS");
    out.push('\n');
    let _ = writeln!(out, "Top Goals by Check-in Count:");
    out.push('\n');
    for (i, g) in summary.goals.iter().take(TOP_GOALS).enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, truncate_label(&g.goal, GOAL_LABEL_WIDTH));
        let _ = writeln!(
            out,
            "   Check-ins: {}, On-Task: {}",
            g.total,
            format_percent(g.on_task_rate())
        );
        out.push('\n');
    }

    out
}

/// Visualization status and closing hint printed after the report
pub(crate) fn render_footer(charts: &ChartOutcome) -> String {
    let mut out = String::new();

    match charts {
        ChartOutcome::Skipped(reason) => {
            let _ = writeln!(out, "Skipping visualizations ({reason})");
        }
        ChartOutcome::Written(path) => {
            write_section(&mut out, "Creating visualizations...");
            out.push('\n');
            let _ = writeln!(out, "Visualization saved to: {}", path.display());
        }
        ChartOutcome::Failed(reason) => {
            write_section(&mut out, "Creating visualizations...");
            out.push('\n');
            let _ = writeln!(out, "Visualization failed: {reason}");
        }
    }

    let _ = writeln!(out, "{}", light_rule());
    let _ = writeln!(out, "Analysis complete!");
    out.push('\n');
    let _ = writeln!(out, "Want to search notes? Example:");
    let _ = writeln!(out, "  focusstats notes \"stuck\" \"bug\"");
    out
}
