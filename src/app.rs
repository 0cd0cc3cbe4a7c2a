use crate::chart::{self, ChartSink};
use crate::cli::{Cli, ReportStyle, RunMode};
use crate::config::Config;
use crate::core::{Entry, KeywordQuery, StatusRules, Summary, search, summarize};
use crate::error::AppError;
use crate::output::{
    output_empty_json, output_matches_json, output_summary_json, render_empty_report,
    render_footer, render_matches, render_matches_table, render_report, render_report_table,
};
use crate::source::{FileSource, LineSource, ParseOutcome, parse_lines, resolve_log_path};
use crate::utils::Timezone;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) rules: &'a StatusRules,
    pub(crate) timezone: Timezone,
}

/// Read the whole log once and parse it
fn load_entries(source: &dyn LineSource, quiet: bool) -> Result<ParseOutcome, AppError> {
    if !quiet {
        eprintln!("Loading data from: {}", source.describe());
    }
    let lines = source.read_lines()?;
    let outcome = parse_lines(lines);
    if !quiet && outcome.skipped > 0 {
        eprintln!("Skipped {} invalid line(s)", outcome.skipped);
    }
    Ok(outcome)
}

/// `None` for a log without check-ins; any other failure is passed on
fn summary_or_empty(
    entries: &[Entry],
    rules: &StatusRules,
    timezone: Timezone,
) -> Result<Option<Summary>, AppError> {
    match summarize(entries, rules, timezone) {
        Ok(summary) => Ok(Some(summary)),
        Err(AppError::EmptyDataset) => Ok(None),
        Err(e) => Err(e),
    }
}

fn handle_report(
    ctx: &CommandContext<'_>,
    outcome: &ParseOutcome,
    sink: &dyn ChartSink,
) -> Result<(), AppError> {
    let Some(summary) = summary_or_empty(&outcome.entries, ctx.rules, ctx.timezone)? else {
        if ctx.cli.json {
            println!("{}", output_empty_json(outcome.skipped));
        } else {
            print!("{}", render_empty_report());
        }
        return Ok(());
    };

    if ctx.cli.json {
        println!("{}", output_summary_json(&summary, outcome.skipped));
        return Ok(());
    }

    match ctx.cli.style {
        ReportStyle::Plain => print!("{}", render_report(&summary)),
        ReportStyle::Table => print!("{}", render_report_table(&summary, ctx.cli.use_color())),
    }
    let charts = chart::draw(sink, &summary);
    print!("{}", render_footer(&charts));
    Ok(())
}

fn handle_search(ctx: &CommandContext<'_>, outcome: &ParseOutcome, keywords: &[String]) {
    let query = KeywordQuery::new(keywords);
    if outcome.entries.is_empty() && !ctx.cli.json {
        println!("{}", AppError::EmptyDataset);
        return;
    }

    let matches = search(&outcome.entries, &query);
    tracing::debug!(matches = matches.len(), "keyword search finished");

    if ctx.cli.json {
        println!("{}", output_matches_json(&query, &matches, ctx.timezone));
        return;
    }
    match ctx.cli.style {
        ReportStyle::Plain => print!("{}", render_matches(&query, &matches, ctx.timezone)),
        ReportStyle::Table => print!(
            "{}",
            render_matches_table(&query, &matches, ctx.timezone, ctx.cli.use_color())
        ),
    }
}

/// Run one invocation; dataset-level failures come back as errors
pub(crate) fn run(mut cli: Cli, config: Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let mode = RunMode::from(cli.command.take());

    // Capability is fixed before any data is read
    let sink = chart::select_sink(cli.no_charts, cli.chart_output.clone());

    let log_path = resolve_log_path(cli.log.as_deref(), config.log_path.as_deref())?;
    let source = FileSource::new(log_path);
    let outcome = load_entries(&source, cli.json)?;

    let ctx = CommandContext {
        cli: &cli,
        rules: &config.markers,
        timezone,
    };

    match mode {
        RunMode::Report => handle_report(&ctx, &outcome, sink.as_ref())?,
        RunMode::Search(keywords) => handle_search(&ctx, &outcome, &keywords),
    }
    Ok(())
}
