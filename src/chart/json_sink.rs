//! Chart document writer for an external plotting front-end

use std::fs;
use std::path::PathBuf;

use crate::chart::{ChartOutcome, ChartSet, ChartSink};
use crate::error::AppError;

pub(crate) struct JsonChartSink {
    path: PathBuf,
}

impl JsonChartSink {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn error(&self, reason: impl ToString) -> AppError {
        AppError::ChartOutput {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl ChartSink for JsonChartSink {
    fn render(&self, charts: &ChartSet) -> Result<ChartOutcome, AppError> {
        let body = serde_json::to_string_pretty(charts).map_err(|e| self.error(e))?;
        fs::write(&self.path, body).map_err(|e| self.error(e))?;
        tracing::debug!("Wrote chart document to {}", self.path.display());
        Ok(ChartOutcome::Written(self.path.clone()))
    }
}
