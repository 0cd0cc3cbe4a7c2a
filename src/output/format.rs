use chrono::{DateTime, FixedOffset};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Width of section rules in the plain report
pub(super) const RULE_WIDTH: usize = 60;

pub(super) fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub(super) fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// One decimal place, e.g. "66.7%"
pub(super) fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Proportional bar: one block per two percent, 50 blocks at 100%
pub(super) fn status_bar(pct: f64) -> String {
    let blocks = (pct / 2.0).floor().max(0.0) as usize;
    "█".repeat(blocks)
}

/// Cut a label to `width` characters for display
pub(super) fn truncate_label(label: &str, width: usize) -> String {
    label.chars().take(width).collect()
}

pub(super) fn format_timestamp(dt: DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    cell
}

/// Color for an on-task rate: green when mostly focused, red when mostly not
pub(super) fn rate_color(pct: f64, use_color: bool) -> Option<Color> {
    if !use_color {
        return None;
    }
    if pct >= 75.0 {
        Some(Color::Green)
    } else if pct < 40.0 {
        Some(Color::Red)
    } else {
        Some(Color::Yellow)
    }
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}
