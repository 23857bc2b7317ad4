use std::path::Path;

use crate::error::{Context, Result};
use crate::fetch::PriceBar;

pub const PRICE_HISTORY_HEADER: [&str; 7] =
    ["Datetime", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Persist bars as CSV. Absent values become empty fields; `Close` stays at column 4.
pub fn write_price_history<P: AsRef<Path>>(file_path: P, bars: &[PriceBar]) -> Result<()> {
    let path = file_path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV writer for {}", path.display()))?;

    writer.write_record(PRICE_HISTORY_HEADER)?;

    for bar in bars {
        writer.write_record([
            bar.timestamp.format(TIMESTAMP_FMT).to_string(),
            format_price(bar.open),
            format_price(bar.high),
            format_price(bar.low),
            format_price(bar.close),
            format_price(bar.adj_close),
            bar.volume.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn format_price(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
