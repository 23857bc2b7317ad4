use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::error::{AppError, Context, Result};

pub const CATEGORY_COLUMN: &str = "cache_type";
pub const LATENCY_COLUMN: &str = "latency_us";

const MISSING_MARKERS: &[&str] = &["nan", "null", "n/a", "na", "none"];

/// All measurements recorded for one `cache_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyGroup {
    pub name: String,
    /// Rows carrying this category, including those with a missing measurement.
    pub rows: usize,
    /// Non-missing `latency_us` values in file order.
    pub values: Vec<f64>,
}

/// Latency rows partitioned by `cache_type`, ordered by group name.
#[derive(Debug, Clone, Default)]
pub struct LatencyDataset {
    groups: Vec<LatencyGroup>,
}

impl LatencyDataset {
    /// Load a benchmark CSV, failing with `MissingFile` or `MissingColumns` before any row is read.
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(AppError::MissingFile(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file {}", path.display()))?;
        let dataset = Self::from_reader(file)?;
        debug!(
            "Loaded {} groups from {}",
            dataset.groups.len(),
            path.display()
        );
        for group in &dataset.groups {
            debug!(
                "{}: {} rows, {} measurements",
                group.name,
                group.rows,
                group.values.len()
            );
        }
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();

        let position = |name: &str| headers.iter().position(|header| header == name);
        let (Some(category_idx), Some(latency_idx)) =
            (position(CATEGORY_COLUMN), position(LATENCY_COLUMN))
        else {
            return Err(AppError::MissingColumns);
        };

        let mut groups: BTreeMap<String, LatencyGroup> = BTreeMap::new();
        for (line, result) in reader.records().enumerate() {
            let record = result?;

            let category = record.get(category_idx).unwrap_or("").trim();
            if category.is_empty() {
                debug!("Skipping row {} without {}", line + 2, CATEGORY_COLUMN);
                continue;
            }

            let group = groups
                .entry(category.to_string())
                .or_insert_with(|| LatencyGroup {
                    name: category.to_string(),
                    rows: 0,
                    values: Vec::new(),
                });
            group.rows += 1;

            if let Some(value) = parse_latency(record.get(latency_idx).unwrap_or(""), line + 2) {
                group.values.push(value);
            }
        }

        Ok(Self {
            groups: groups.into_values().collect(),
        })
    }

    pub fn groups(&self) -> &[LatencyGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Parse a `latency_us` cell; `None` marks a missing measurement.
fn parse_latency(raw: &str, line: usize) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if MISSING_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
    {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_nan() => None,
        Ok(value) => Some(value),
        Err(_) => {
            warn!(
                "Ignoring non-numeric {} '{}' on line {}",
                LATENCY_COLUMN, trimmed, line
            );
            None
        }
    }
}
