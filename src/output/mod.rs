mod format;
mod json;
mod report;
mod search;
mod table;

pub(crate) use json::{output_empty_json, output_matches_json, output_summary_json};
pub(crate) use report::{render_empty_report, render_footer, render_report};
pub(crate) use search::render_matches;
pub(crate) use table::{render_matches_table, render_report_table};
