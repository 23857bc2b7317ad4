use crate::utils::{format_number, pad_left, pad_right};

use super::dataset::{LatencyGroup, CATEGORY_COLUMN};
use super::stats::Describe;

pub const SUMMARY_BANNER: &str = "=== Summary Statistics ===";

const COLUMNS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
const COLUMN_GAP: usize = 2;

/// Describe every group's `latency_us` values, in group order.
pub fn describe_groups(groups: &[LatencyGroup]) -> Vec<(String, Describe)> {
    groups
        .iter()
        .map(|group| (group.name.clone(), Describe::from_values(&group.values)))
        .collect()
}

/// Lay out grouped statistics as a fixed-width table indexed by `cache_type`.
///
/// ```text
///             count   mean       std   min     25%    50%     75%   max
/// cache_type
/// LocalLRU        2  12.75  0.353553  12.5  12.625  12.75  12.875  13.0
/// LockCache       1   50.0       NaN  50.0    50.0   50.0    50.0  50.0
/// ```
pub fn render_summary(rows: &[(String, Describe)]) -> String {
    let cells: Vec<[String; 8]> = rows
        .iter()
        .map(|(_, d)| {
            [
                d.count.to_string(),
                format_number(d.mean),
                format_number(d.std),
                format_number(d.min),
                format_number(d.q25),
                format_number(d.q50),
                format_number(d.q75),
                format_number(d.max),
            ]
        })
        .collect();

    let index_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once(CATEGORY_COLUMN.len()))
        .max()
        .unwrap_or(0);

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let mut header = pad_right("", index_width);
    for (col, name) in COLUMNS.iter().enumerate() {
        header.push_str(&" ".repeat(COLUMN_GAP));
        header.push_str(&pad_left(name, widths[col]));
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(CATEGORY_COLUMN);
    out.push('\n');

    for ((name, _), row) in rows.iter().zip(&cells) {
        let mut line = pad_right(name, index_width);
        for (col, cell) in row.iter().enumerate() {
            line.push_str(&" ".repeat(COLUMN_GAP));
            line.push_str(&pad_left(cell, widths[col]));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}
