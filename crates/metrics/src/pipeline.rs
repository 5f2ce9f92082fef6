use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dashboard_core::{MetricsTable, Platform, TaskMetrics};

use crate::csv::split_record;
use crate::parser::{parse_count, parse_duration, parse_flag, parse_timestamp};
use crate::types::{DataError, Result};

const CHANGE_COLUMNS: [&str; 3] = ["design_changes", "config_changes", "store_changes"];

/// Derives the per-task metrics table from a CSV file on disk.
///
/// Rows without a parseable `created_date` or `started_date` are dropped.
/// Repeated keys overwrite earlier rows. The result depends only on the
/// file contents, which is what makes memoizing it by path sound.
pub fn derive(path: &Path) -> Result<MetricsTable> {
    let file = File::open(path)?;
    derive_from_reader(BufReader::new(file))
}

pub fn derive_from_reader<R: BufRead>(reader: R) -> Result<MetricsTable> {
    let mut lines = reader.lines();
    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(DataError::MissingColumn("key")),
        }
    };
    let columns = column_index(&header)?;

    let mut table = MetricsTable::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Header is row 1; data rows are numbered from 2 for error messages.
        let row = offset + 2;
        let cells = split_record(&line);
        let cell = |name: &str| cell_value(&columns, &cells, name);

        let Some(created) = parse_timestamp(cell("created_date")) else {
            continue;
        };
        let Some(started) = parse_timestamp(cell("started_date")) else {
            continue;
        };
        let key = cell("key").trim();
        if key.is_empty() {
            return Err(DataError::MissingKey { row });
        }

        let days_to_start = (started - created).num_days();
        let days_to_complete =
            parse_timestamp(cell("completed_date")).map(|completed| (completed - created).num_days());

        let mut platforms: Vec<String> = Platform::ALL
            .iter()
            .filter(|platform| parse_flag(cell(platform.as_str())))
            .map(|platform| platform.as_str().to_string())
            .collect();
        if platforms.is_empty() {
            platforms.push(Platform::OTHER.to_string());
        }

        let total_changes = CHANGE_COLUMNS
            .into_iter()
            .map(|column| parse_count(cell(column)))
            .sum();

        table.insert(
            key.to_string(),
            TaskMetrics {
                days_to_start,
                days_to_complete,
                active_duration: parse_duration(cell("active_duration")),
                total_duration: parse_duration(cell("total_duration")),
                platforms,
                total_changes,
            },
        );
    }
    Ok(table)
}

fn cell_value<'a>(columns: &HashMap<String, usize>, cells: &'a [String], name: &str) -> &'a str {
    columns
        .get(name)
        .and_then(|&index| cells.get(index))
        .map(|value| value.as_str())
        .unwrap_or("")
}

fn column_index(header: &str) -> Result<HashMap<String, usize>> {
    let columns: HashMap<String, usize> = split_record(header)
        .into_iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_string(), index))
        .collect();
    if !columns.contains_key("key") {
        return Err(DataError::MissingColumn("key"));
    }
    Ok(columns)
}
