//! Chart payload aggregation over a derived metrics table.

use std::collections::BTreeMap;

use dashboard_core::{
    BoxStats, CorrelationMatrix, Histogram, MetricsTable, PieChart, SURVEY_OPTIONS,
    SURVEY_QUESTIONS, SurveyAnswer,
};

pub const HISTOGRAM_BINS: usize = 20;

const CORRELATION_COLUMNS: [&str; 5] = [
    "days_to_start",
    "days_to_complete",
    "active_duration",
    "total_duration",
    "total_changes",
];

/// Bins `values` into `nbins` equal-width buckets between min and max.
pub fn histogram(values: &[f64], nbins: usize) -> Histogram {
    if values.is_empty() || nbins == 0 {
        return Histogram {
            bin_edges: Vec::new(),
            counts: Vec::new(),
        };
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Histogram {
            bin_edges: vec![min, max],
            counts: vec![values.len() as u64],
        };
    }
    let width = (max - min) / nbins as f64;
    let bin_edges: Vec<f64> = (0..=nbins).map(|index| min + width * index as f64).collect();
    let mut counts = vec![0u64; nbins];
    for &value in values {
        let mut index = ((value - min) / width) as usize;
        if index >= nbins {
            index = nbins - 1;
        }
        counts[index] += 1;
    }
    Histogram { bin_edges, counts }
}

/// Linear-interpolation quantile over a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = position - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Five-number summaries of days-to-start, one per platform. Tasks tagged
/// with several platforms contribute to each of them.
pub fn box_stats_by_platform(table: &MetricsTable) -> Vec<BoxStats> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in table.values() {
        for platform in &record.platforms {
            groups
                .entry(platform.as_str())
                .or_default()
                .push(record.days_to_start as f64);
        }
    }
    groups
        .into_iter()
        .map(|(platform, mut values)| {
            values.sort_by(f64::total_cmp);
            BoxStats {
                platform: platform.to_string(),
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
                sample_count: values.len(),
            }
        })
        .collect()
}

/// Pearson correlation over the five metric columns, pairwise-complete
/// observations. A cell is `None` when fewer than two complete pairs exist
/// or either side has zero variance.
pub fn correlation_matrix(table: &MetricsTable) -> CorrelationMatrix {
    let rows: Vec<[Option<f64>; 5]> = table
        .values()
        .map(|record| {
            [
                Some(record.days_to_start as f64),
                record.days_to_complete.map(|days| days as f64),
                record.active_duration,
                record.total_duration,
                Some(record.total_changes as f64),
            ]
        })
        .collect();

    let values = (0..CORRELATION_COLUMNS.len())
        .map(|left| {
            (0..CORRELATION_COLUMNS.len())
                .map(|right| pearson(&rows, left, right))
                .collect()
        })
        .collect();

    CorrelationMatrix {
        columns: CORRELATION_COLUMNS.iter().map(|name| name.to_string()).collect(),
        values,
    }
}

fn pearson(rows: &[[Option<f64>; 5]], left: usize, right: usize) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|row| match (row[left], row[right]) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (a, b) in &pairs {
        covariance += (a - mean_a) * (b - mean_b);
        var_a += (a - mean_a).powi(2);
        var_b += (b - mean_b).powi(2);
    }
    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }
    Some(covariance / (var_a.sqrt() * var_b.sqrt()))
}

/// Per-question option counts for the survey pie charts.
pub fn survey_pies(answers: &[SurveyAnswer]) -> Vec<PieChart> {
    SURVEY_QUESTIONS
        .iter()
        .zip(SURVEY_OPTIONS.iter())
        .enumerate()
        .map(|(question_index, (question, options))| {
            let counts = options
                .iter()
                .map(|option| {
                    answers
                        .iter()
                        .filter(|answer| answer.answers[question_index] == *option)
                        .count() as u64
                })
                .collect();
            PieChart {
                question: question.to_string(),
                labels: options.iter().map(|option| option.to_string()).collect(),
                counts,
            }
        })
        .collect()
}
