//! Visualization sink
//!
//! The report never depends on charts. Whether a real sink exists is decided
//! once at start-up; otherwise a `NoopSink` stands in.

#[cfg(feature = "charts")]
mod json_sink;

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use crate::core::Summary;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Slice {
    pub(crate) label: String,
    pub(crate) count: usize,
    pub(crate) percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DailyPoint {
    pub(crate) date: NaiveDate,
    pub(crate) count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct HourBar {
    pub(crate) hour: u32,
    pub(crate) on_task_rate: f64,
}

/// One status across all dates, zero-filled
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StackSeries {
    pub(crate) status: String,
    pub(crate) counts: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StackedBars {
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) series: Vec<StackSeries>,
}

/// The four charts of the analysis figure
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChartSet {
    pub(crate) title: &'static str,
    pub(crate) status_distribution: Vec<Slice>,
    pub(crate) checkins_per_day: Vec<DailyPoint>,
    pub(crate) on_task_rate_by_hour: Vec<HourBar>,
    pub(crate) status_by_day: StackedBars,
}

impl ChartSet {
    pub(crate) fn from_summary(summary: &Summary) -> Self {
        let status_distribution = summary
            .statuses
            .iter()
            .map(|s| Slice {
                label: s.status.clone(),
                count: s.count,
                percentage: s.percentage,
            })
            .collect();

        let checkins_per_day = summary
            .days
            .iter()
            .map(|d| DailyPoint {
                date: d.date,
                count: d.total,
            })
            .collect();

        let on_task_rate_by_hour = summary
            .hours
            .iter()
            .map(|h| HourBar {
                hour: h.hour,
                on_task_rate: h.on_task_rate(),
            })
            .collect();

        let dates = summary.days.iter().map(|d| d.date).collect();
        let series = summary
            .statuses
            .iter()
            .map(|s| StackSeries {
                status: s.status.clone(),
                counts: summary
                    .days
                    .iter()
                    .map(|d| {
                        d.statuses
                            .iter()
                            .find(|(status, _)| *status == s.status)
                            .map_or(0, |(_, count)| *count)
                    })
                    .collect(),
            })
            .collect();

        ChartSet {
            title: "Focus Time Analysis",
            status_distribution,
            checkins_per_day,
            on_task_rate_by_hour,
            status_by_day: StackedBars { dates, series },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChartOutcome {
    Skipped(String),
    Written(PathBuf),
    Failed(String),
}

/// Consumer of the chart set
pub(crate) trait ChartSink {
    fn render(&self, charts: &ChartSet) -> Result<ChartOutcome, AppError>;
}

/// Sink used when charts are unavailable or turned off
pub(crate) struct NoopSink {
    reason: &'static str,
}

impl NoopSink {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl ChartSink for NoopSink {
    fn render(&self, _charts: &ChartSet) -> Result<ChartOutcome, AppError> {
        Ok(ChartOutcome::Skipped(self.reason.to_string()))
    }
}

/// Resolve the chart capability for this run
pub(crate) fn select_sink(disabled: bool, output: Option<PathBuf>) -> Box<dyn ChartSink> {
    if disabled {
        return Box::new(NoopSink::new("disabled with --no-charts"));
    }
    available_sink(output)
}

#[cfg(feature = "charts")]
fn available_sink(output: Option<PathBuf>) -> Box<dyn ChartSink> {
    use crate::consts::DEFAULT_CHART_OUTPUT;
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_OUTPUT));
    Box::new(json_sink::JsonChartSink::new(path))
}

#[cfg(not(feature = "charts"))]
fn available_sink(_output: Option<PathBuf>) -> Box<dyn ChartSink> {
    Box::new(NoopSink::new("built without chart support"))
}

/// Hand the summary to the sink; failures degrade to a message
pub(crate) fn draw(sink: &dyn ChartSink, summary: &Summary) -> ChartOutcome {
    let charts = ChartSet::from_summary(summary);
    match sink.render(&charts) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("{e}");
            ChartOutcome::Failed(e.to_string())
        }
    }
}
