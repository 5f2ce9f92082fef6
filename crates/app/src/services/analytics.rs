use std::sync::Arc;

use serde::{Deserialize, Serialize};

use dashboard_core::{BoxStats, CorrelationMatrix, Histogram, PieChart};

use crate::cache::DerivationCache;
use crate::charts::{
    HISTOGRAM_BINS, box_stats_by_platform, correlation_matrix, histogram, survey_pies,
};
use crate::error::{AppError, Result};
use crate::services::SharedConfig;
use crate::survey::SurveyStore;
use crate::uploads::sanitize_filename;

/// Everything the dashboard page needs to render one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub filename: String,
    pub task_count: usize,
    pub hist_days_to_start: Histogram,
    pub hist_days_to_complete: Histogram,
    pub box_days_to_start: Vec<BoxStats>,
    pub correlation: CorrelationMatrix,
    pub survey_pies: Vec<PieChart>,
}

#[derive(Clone)]
pub struct AnalyticsService {
    config: SharedConfig,
    cache: Arc<DerivationCache>,
}

impl AnalyticsService {
    pub(super) fn new(config: SharedConfig, cache: Arc<DerivationCache>) -> Self {
        Self { config, cache }
    }

    /// Derives (or reuses) the metrics table behind `filename` and builds
    /// the chart payload. `Ok(None)` is the "No valid data found." state.
    pub fn charts_for(&self, filename: &str) -> Result<Option<DashboardCharts>> {
        let name = sanitize_filename(filename)?;
        let path = self.config.upload_dir.join(&name);
        if !path.is_file() {
            return Err(AppError::NotFound(format!("no dataset named {}", name)));
        }
        let table = self.cache.get_or_compute(&path)?;
        if table.is_empty() {
            return Ok(None);
        }

        let days_to_start: Vec<f64> = table
            .values()
            .map(|record| record.days_to_start as f64)
            .collect();
        let days_to_complete: Vec<f64> = table
            .values()
            .filter_map(|record| record.days_to_complete)
            .map(|days| days as f64)
            .collect();
        let answers = SurveyStore::new(self.config.survey_path()).load()?;

        Ok(Some(DashboardCharts {
            filename: name,
            task_count: table.len(),
            hist_days_to_start: histogram(&days_to_start, HISTOGRAM_BINS),
            hist_days_to_complete: histogram(&days_to_complete, HISTOGRAM_BINS),
            box_days_to_start: box_stats_by_platform(&table),
            correlation: correlation_matrix(&table),
            survey_pies: survey_pies(&answers),
        }))
    }
}
